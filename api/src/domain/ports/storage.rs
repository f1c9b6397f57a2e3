//! Document store port trait
//!
//! Abstracts where uploaded files end up. The production adapter writes to
//! a local directory; tests keep bytes in memory.

use async_trait::async_trait;

use crate::error::DomainError;

/// Storage for uploaded document bytes
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist the bytes under the given unique stored name
    async fn save(&self, stored_name: &str, bytes: &[u8]) -> Result<(), DomainError>;
}
