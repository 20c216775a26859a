//! Credential issuer port.
//!
//! Converts an authenticated [`Session`] into a bearer [`Credential`] on
//! demand. Issuance is modeled as async: the production implementation signs
//! synchronously today, but callers must treat it as a suspension point.

use async_trait::async_trait;

use crate::domain::{ApiError, Credential, Session};

/// Issues a signed bearer credential from an established session.
///
/// # Contract
///
/// Implementations must:
/// - Fail with [`ApiError::Unauthenticated`] when the session carries no
///   subject id
/// - Fail with [`ApiError::Misconfigured`] when the signing secret is absent
/// - Never produce a silently-empty credential
/// - Perform no network I/O
#[async_trait]
pub trait CredentialIssuer: Send + Sync {
    /// Sign the session's claim set into an encoded credential.
    async fn issue(&self, session: &Session) -> Result<Credential, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SessionUser;
    use chrono::{Duration, Utc};

    /// Trivial implementation for exercising the trait surface.
    struct EchoIssuer;

    #[async_trait]
    impl CredentialIssuer for EchoIssuer {
        async fn issue(&self, session: &Session) -> Result<Credential, ApiError> {
            match session.user.subject() {
                Some(subject) => Ok(Credential::new(subject.as_str().to_string())),
                None => Err(ApiError::Unauthenticated),
            }
        }
    }

    #[tokio::test]
    async fn issuer_rejects_subjectless_session() {
        let session = Session::new(SessionUser::new(""), Utc::now() + Duration::hours(1));
        let result = EchoIssuer.issue(&session).await;
        assert!(matches!(result, Err(ApiError::Unauthenticated)));
    }

    #[test]
    fn issuer_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn CredentialIssuer) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn CredentialIssuer>>();
    }
}
