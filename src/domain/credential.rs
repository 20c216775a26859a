//! Signed credential types.
//!
//! A [`Credential`] is the derived, immutable artifact presented to the
//! backend: a claim set plus an HMAC-SHA256 signature, encoded as a compact
//! three-segment base64url token. It is never persisted and never mutated;
//! a fresh session check produces a fresh credential.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The data signed inside a credential.
///
/// `sub` and `exp` are always present; anything the session carried beyond
/// those travels in `extra` and is flattened into the encoded token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimSet {
    /// Subject - the user id the credential proves.
    pub sub: String,

    /// Expiry timestamp (Unix epoch seconds), bounded by the session's
    /// validity window at issuance time.
    pub exp: i64,

    /// Issued at timestamp, when login carried one through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Opaque claims carried through from the session.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClaimSet {
    /// Creates a claim set with only the required claims.
    pub fn new(sub: impl Into<String>, exp: i64) -> Self {
        Self {
            sub: sub.into(),
            exp,
            iat: None,
            extra: Map::new(),
        }
    }
}

/// An encoded bearer token, held in memory for the duration of one request
/// flow.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps an already-encoded token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the encoded token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the credential, returning the encoded token.
    pub fn into_string(self) -> String {
        self.0
    }
}

// The token proves identity; keep it out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(redacted)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let credential = Credential::new("eyJ.secret.sig");
        assert_eq!(format!("{:?}", credential), "Credential(redacted)");
    }

    #[test]
    fn claim_set_serializes_flattened_extras() {
        let mut claims = ClaimSet::new("u1", 2_000_000_000);
        claims
            .extra
            .insert("provider".to_string(), serde_json::json!("github"));

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["sub"], "u1");
        assert_eq!(value["exp"], 2_000_000_000);
        assert_eq!(value["provider"], "github");
        // iat is absent, not null
        assert!(value.get("iat").is_none());
    }
}
