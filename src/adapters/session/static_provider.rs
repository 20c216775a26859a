//! Static session provider.
//!
//! Holds at most one session and hands out clones of it. This is the
//! `SessionProvider` used in tests and in hosts that resolve the login state
//! up front (e.g. once per page render) rather than lazily per call.
//!
//! # Example
//!
//! ```ignore
//! use baynext_console::adapters::session::StaticSessionProvider;
//!
//! let provider = StaticSessionProvider::new().with_session(session);
//! assert!(provider.current().await.is_some());
//! ```

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::Session;
use crate::ports::SessionProvider;

/// Session provider backed by a fixed, swappable slot.
#[derive(Debug, Default)]
pub struct StaticSessionProvider {
    session: RwLock<Option<Session>>,
}

impl StaticSessionProvider {
    /// Creates a provider with nobody logged in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the session this provider hands out.
    pub fn with_session(self, session: Session) -> Self {
        *self.session.write().unwrap() = Some(session);
        self
    }

    /// Replaces the held session (`None` logs out).
    pub fn set_session(&self, session: Option<Session>) {
        *self.session.write().unwrap() = session;
    }
}

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn current(&self) -> Option<Session> {
        self.session.read().unwrap().clone()
    }
}
