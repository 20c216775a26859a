//! Credential issuing adapters.
//!
//! Implementations of the `CredentialIssuer` port:
//!
//! - `jwt` - HS256 signing with the configured shared secret
//! - `cache` - opt-in decorator memoizing the last issued credential

mod cache;
mod jwt;

pub use cache::CachedCredentialIssuer;
pub use jwt::JwtCredentialIssuer;
