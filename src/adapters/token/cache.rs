//! Credential cache decorator.
//!
//! Signing is cheap but not free; UI flows that fan out several backend calls
//! from one session generation can wrap their issuer in this decorator to
//! reuse the last credential. The cache is explicit and keyed by subject id
//! plus session expiry - a new session check (new expiry) or a different user
//! invalidates the slot.
//!
//! Not wired in by default; callers opt in:
//!
//! ```ignore
//! let issuer = CachedCredentialIssuer::new(JwtCredentialIssuer::new(&config.auth));
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::{ApiError, Credential, Session};
use crate::ports::CredentialIssuer;

/// Last issued credential and the session identity it belongs to.
struct CacheSlot {
    subject: String,
    expires_at: DateTime<Utc>,
    credential: Credential,
}

impl CacheSlot {
    fn matches(&self, subject: &str, expires_at: DateTime<Utc>) -> bool {
        self.subject == subject && self.expires_at == expires_at
    }
}

/// Memoizes the inner issuer's last credential per session generation.
pub struct CachedCredentialIssuer<I> {
    inner: I,
    slot: RwLock<Option<CacheSlot>>,
}

impl<I> CachedCredentialIssuer<I> {
    /// Wraps an issuer with a single-slot credential cache.
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            slot: RwLock::new(None),
        }
    }
}

#[async_trait]
impl<I: CredentialIssuer> CredentialIssuer for CachedCredentialIssuer<I> {
    async fn issue(&self, session: &Session) -> Result<Credential, ApiError> {
        // The invariant check stays ahead of any cache hit so a subjectless
        // session can never surface a stale credential.
        let subject = session
            .user
            .subject()
            .ok_or(ApiError::Unauthenticated)?
            .as_str()
            .to_string();

        {
            let slot = self.slot.read().await;
            if let Some(ref cached) = *slot {
                if cached.matches(&subject, session.expires_at) {
                    return Ok(cached.credential.clone());
                }
            }
        }

        // Miss or stale slot - sign fresh, then publish.
        let credential = self.inner.issue(session).await?;

        {
            let mut slot = self.slot.write().await;
            *slot = Some(CacheSlot {
                subject,
                expires_at: session.expires_at,
                credential: credential.clone(),
            });
        }

        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SessionUser;
    use chrono::Duration;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Inner issuer that counts signing calls.
    struct CountingIssuer {
        calls: AtomicUsize,
    }

    impl CountingIssuer {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CredentialIssuer for CountingIssuer {
        async fn issue(&self, session: &Session) -> Result<Credential, ApiError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let subject = session.user.subject().ok_or(ApiError::Unauthenticated)?;
            Ok(Credential::new(format!("{}-{}", subject, n)))
        }
    }

    fn session_at(subject: &str, expires_at: DateTime<Utc>) -> Session {
        Session::new(SessionUser::new(subject), expires_at)
    }

    #[tokio::test]
    async fn repeated_issue_for_same_session_signs_once() {
        let issuer = CachedCredentialIssuer::new(CountingIssuer::new());
        let session = session_at("u1", Utc::now() + Duration::hours(1));

        let first = issuer.issue(&session).await.unwrap();
        let second = issuer.issue(&session).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(issuer.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn new_session_generation_invalidates_the_slot() {
        let issuer = CachedCredentialIssuer::new(CountingIssuer::new());
        let expiry = Utc::now() + Duration::hours(1);

        issuer.issue(&session_at("u1", expiry)).await.unwrap();
        issuer
            .issue(&session_at("u1", expiry + Duration::minutes(30)))
            .await
            .unwrap();

        assert_eq!(issuer.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn different_subject_invalidates_the_slot() {
        let issuer = CachedCredentialIssuer::new(CountingIssuer::new());
        let expiry = Utc::now() + Duration::hours(1);

        let a = issuer.issue(&session_at("u1", expiry)).await.unwrap();
        let b = issuer.issue(&session_at("u2", expiry)).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(issuer.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn subjectless_session_never_hits_the_cache() {
        let issuer = CachedCredentialIssuer::new(CountingIssuer::new());
        let expiry = Utc::now() + Duration::hours(1);
        issuer.issue(&session_at("u1", expiry)).await.unwrap();

        let result = issuer.issue(&session_at("", expiry)).await;
        assert!(matches!(result, Err(ApiError::Unauthenticated)));
        // The inner issuer was never consulted for the bad session.
        assert_eq!(issuer.inner.calls.load(Ordering::SeqCst), 1);
    }
}
