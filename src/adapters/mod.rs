//! Adapters - implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `token` - credential issuing (HS256 JWT) and an opt-in credential cache
//! - `session` - session resolution (static provider for tests/dev wiring)
//! - `api` - the authenticated HTTP client for the backend service

pub mod api;
pub mod session;
pub mod token;

pub use api::{ApiBody, ApiClient, ApiRequest};
pub use session::StaticSessionProvider;
pub use token::{CachedCredentialIssuer, JwtCredentialIssuer};
