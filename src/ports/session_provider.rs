//! Session provider port.
//!
//! The original console resolved the "current" session from ambient
//! request-scoped state. Here that resolution is an explicit, injected
//! dependency: call sites either pre-supply a [`Session`] on the request
//! descriptor or the client asks this port for one.

use async_trait::async_trait;

use crate::domain::Session;

/// Resolves the currently logged-in session, if any.
///
/// # Contract
///
/// Implementations must:
/// - Return `None` when nobody is logged in (never a placeholder session)
/// - Return a fresh snapshot; this crate treats the session as read-only
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The current session, or `None` when unauthenticated.
    async fn current(&self) -> Option<Session>;
}
