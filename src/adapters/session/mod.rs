//! Session resolution adapters.
//!
//! Implementations of the `SessionProvider` port:
//!
//! - `static_provider` - holds a fixed session; used by tests and by hosts
//!   that resolve login state once per request and hand it down explicitly

mod static_provider;

pub use static_provider::StaticSessionProvider;
