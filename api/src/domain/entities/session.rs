//! Session domain entity
//!
//! A login session backed by a bearer token. Only the SHA-256 hash of the
//! token is stored; the plain token is returned once at login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Unique identifier for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An active (or expired) login session
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub user_id: UserId,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Data needed to create a new session
#[derive(Debug, Clone)]
pub struct NewSession {
    pub user_id: UserId,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_at: DateTime<Utc>) -> Session {
        Session {
            id: SessionId::new(),
            user_id: UserId::new(),
            token_hash: "hash".to_string(),
            created_at: Utc::now(),
            expires_at,
        }
    }

    #[test]
    fn future_expiry_is_not_expired() {
        let now = Utc::now();
        assert!(!session(now + Duration::hours(1)).is_expired(now));
    }

    #[test]
    fn past_expiry_is_expired() {
        let now = Utc::now();
        assert!(session(now - Duration::seconds(1)).is_expired(now));
    }

    #[test]
    fn expiry_instant_counts_as_expired() {
        let now = Utc::now();
        assert!(session(now).is_expired(now));
    }
}
