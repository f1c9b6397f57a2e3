//! Conversation domain entity
//!
//! One chatbot exchange: the user's question and the model's reply.
//! Guests can chat too, so the owner is optional; guest exchanges share a
//! single anonymous history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Unique identifier for a conversation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub Uuid);

impl ConversationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ConversationId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted chatbot exchange
#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub owner: Option<UserId>,
    pub user_message: String,
    pub bot_response: String,
    pub created_at: DateTime<Utc>,
}

/// Data needed to persist a new exchange
#[derive(Debug, Clone)]
pub struct NewConversation {
    pub owner: Option<UserId>,
    pub user_message: String,
    pub bot_response: String,
}
