//! Ports - interfaces between the domain and the outside world.
//!
//! Following hexagonal architecture, ports define the contracts this crate
//! needs fulfilled; adapters implement them.
//!
//! - [`CredentialIssuer`] - signs a session into a bearer credential
//! - [`SessionProvider`] - resolves the current login session

mod credential_issuer;
mod session_provider;

pub use credential_issuer::CredentialIssuer;
pub use session_provider::SessionProvider;
