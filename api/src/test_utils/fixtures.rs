//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{User, UserId};

/// Create a test user with default values
pub fn test_user() -> User {
    User {
        id: UserId::new(),
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        cpf: "123.456.789-00".to_string(),
        password_hash: "abc123hash".to_string(),
        created_at: Utc::now(),
    }
}
