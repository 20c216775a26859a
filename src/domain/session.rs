//! Session types for the domain layer.
//!
//! A [`Session`] is externally-established proof of login: it is created by
//! the console's auth layer after a delegated OAuth flow and is **read-only**
//! to this crate. Any identity provider can populate these types.
//!
//! # Design Decisions
//!
//! - `SessionUser.id` is the raw subject string as the provider handed it
//!   over; validation into a [`UserId`] happens at the point of use (the
//!   credential issuer), where an empty subject becomes a hard failure.
//! - `claims` are opaque to this crate and carried into the signed credential
//!   as-is (e.g. an issued-at stamp from login).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Validated, non-empty subject identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning `None` if the subject is empty.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }
        Some(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The logged-in identity attached to a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    /// Subject identifier from the identity provider. May be empty when the
    /// provider misbehaved; the issuer rejects such sessions.
    pub id: String,

    /// Display name, when the provider supplied one.
    #[serde(default)]
    pub name: Option<String>,

    /// Avatar image reference, when the provider supplied one.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl SessionUser {
    /// Creates a session user with only a subject id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            avatar_url: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the avatar reference.
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// The subject as a validated [`UserId`], or `None` when empty.
    pub fn subject(&self) -> Option<UserId> {
        UserId::new(&self.id)
    }
}

/// An established login session.
///
/// Owned by the authentication subsystem; this crate only reads it. A new
/// validity check from the auth layer produces a new `Session` value, and in
/// turn a new signed credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The logged-in user.
    pub user: SessionUser,

    /// Opaque claims carried through from login (issued-at, provider extras).
    /// These travel into the signed credential unmodified.
    #[serde(default)]
    pub claims: Map<String, Value>,

    /// Absolute end of the session's validity window. Credentials issued from
    /// this session expire at the same instant.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for a user with the given validity end.
    pub fn new(user: SessionUser, expires_at: DateTime<Utc>) -> Self {
        Self {
            user,
            claims: Map::new(),
            expires_at,
        }
    }

    /// Attaches an opaque claim carried through from login.
    pub fn with_claim(mut self, key: impl Into<String>, value: Value) -> Self {
        self.claims.insert(key.into(), value);
        self
    }

    /// Whether the validity window has already closed.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}
