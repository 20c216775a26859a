//! Domain types - provider-free values shared by the issuer and the client.
//!
//! Nothing in this module performs I/O or depends on a concrete identity
//! provider or HTTP stack. Adapters populate and consume these types.

mod credential;
mod errors;
mod session;

pub use credential::{ClaimSet, Credential};
pub use errors::ApiError;
pub use session::{Session, SessionUser, UserId};
