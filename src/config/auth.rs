//! Authentication configuration

use secrecy::Secret;
use serde::Deserialize;

use super::error::ValidationError;
use super::Environment;

/// Authentication configuration (credential signing)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Symmetric secret used to sign bearer credentials (HMAC-SHA256).
    ///
    /// Optional at load time so that logged-out tooling can still run;
    /// issuing a credential without it fails with `Misconfigured`.
    #[serde(default)]
    pub secret: Option<Secret<String>>,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// Production deployments must carry a signing secret; in development a
    /// missing secret only fails at issuance time.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if *environment == Environment::Production && self.secret.is_none() {
            return Err(ValidationError::MissingRequired("AUTH_SECRET"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { secret: None }
    }
}
