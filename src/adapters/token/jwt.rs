//! HS256 credential issuer.
//!
//! Signs a session's claim set into a compact JWT (three dot-separated
//! base64url segments) with a shared symmetric secret, and verifies tokens
//! signed the same way. Signing is CPU-bound with no network I/O; the async
//! trait method is still a suspension point from the caller's view.
//!
//! # Example
//!
//! ```ignore
//! use baynext_console::adapters::token::JwtCredentialIssuer;
//! use baynext_console::ports::CredentialIssuer;
//!
//! let issuer = JwtCredentialIssuer::new(&config.auth);
//! let credential = issuer.issue(&session).await?;
//! let claims = issuer.verify(credential.as_str())?;
//! assert_eq!(claims.sub, session.user.id);
//! ```

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;

use crate::config::AuthConfig;
use crate::domain::{ApiError, ClaimSet, Credential, Session};
use crate::ports::CredentialIssuer;

/// Issues bearer credentials signed with a shared HMAC-SHA256 secret.
///
/// Each call performs a fresh signature; wrap in
/// [`CachedCredentialIssuer`](super::CachedCredentialIssuer) to memoize per
/// session generation.
pub struct JwtCredentialIssuer {
    secret: Option<Secret<String>>,
}

impl JwtCredentialIssuer {
    /// Creates an issuer from the auth configuration.
    ///
    /// A missing secret is accepted here; issuing then fails with
    /// [`ApiError::Misconfigured`].
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.secret.clone(),
        }
    }

    /// Creates an issuer with an explicit secret. Mostly useful in tests.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(Secret::new(secret.into())),
        }
    }

    /// Builds the claim set for a session.
    ///
    /// Precondition: the session must carry a non-empty subject id. Reserved
    /// claims (`sub`, `exp`) in the session's extras are discarded so the
    /// signed values are always the session's own subject and expiry.
    fn claim_set(session: &Session) -> Result<ClaimSet, ApiError> {
        let subject = session.user.subject().ok_or(ApiError::Unauthenticated)?;

        let mut extra = session.claims.clone();
        extra.remove("sub");
        extra.remove("exp");
        let iat = extra.get("iat").and_then(Value::as_i64);
        if iat.is_some() {
            extra.remove("iat");
        }

        Ok(ClaimSet {
            sub: subject.as_str().to_string(),
            exp: session.expires_at.timestamp(),
            iat,
            extra,
        })
    }

    /// Verifies a credential signed with the same secret and returns its
    /// claim set. Expiry is enforced with zero leeway.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Misconfigured`] - no signing secret configured
    /// * [`ApiError::Unauthenticated`] - bad signature, malformed token, or
    ///   expired credential
    pub fn verify(&self, token: &str) -> Result<ClaimSet, ApiError> {
        let secret = self.secret.as_ref().ok_or(ApiError::Misconfigured)?;
        let key = DecodingKey::from_secret(secret.expose_secret().as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<ClaimSet>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("credential verification failed: {}", e);
                ApiError::Unauthenticated
            })
    }
}

#[async_trait]
impl CredentialIssuer for JwtCredentialIssuer {
    async fn issue(&self, session: &Session) -> Result<Credential, ApiError> {
        // Precondition order matters: a subjectless session is an auth
        // failure even when the secret is also missing.
        let claims = Self::claim_set(session)?;

        let secret = self.secret.as_ref().ok_or(ApiError::Misconfigured)?;
        let key = EncodingKey::from_secret(secret.expose_secret().as_bytes());

        let token = encode(&Header::new(Algorithm::HS256), &claims, &key).map_err(|e| {
            tracing::error!("credential signing failed: {}", e);
            ApiError::Misconfigured
        })?;

        Ok(Credential::new(token))
    }
}

impl std::fmt::Debug for JwtCredentialIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtCredentialIssuer")
            .field("secret_configured", &self.secret.is_some())
            .finish()
    }
}
