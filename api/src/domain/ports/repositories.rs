//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{
    Conversation, Document, NewConversation, NewDocument, NewSession, NewSimulation, NewUser,
    Session, SessionId, Simulation, User, UserId,
};
use crate::error::DomainError;

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by email (emails are unique)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
}

/// Repository for login sessions
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Create a new session
    async fn create(&self, session: &NewSession) -> Result<Session, DomainError>;

    /// Find a session by its token hash
    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, DomainError>;

    /// Delete a session (logout)
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;

    /// Delete every session that expired before `now`; returns how many went
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError>;
}

/// Repository for chatbot conversations
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Persist a new exchange
    async fn create(&self, conversation: &NewConversation) -> Result<Conversation, DomainError>;

    /// Most recent exchanges for an owner, newest first.
    /// `None` selects the shared guest history.
    async fn find_recent(
        &self,
        owner: Option<&UserId>,
        limit: i64,
    ) -> Result<Vec<Conversation>, DomainError>;
}

/// Repository for uploaded documents
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Persist a new document record
    async fn create(&self, document: &NewDocument) -> Result<Document, DomainError>;

    /// All documents of an owner, newest first
    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Document>, DomainError>;
}

/// Repository for tax simulations
#[async_trait]
pub trait SimulationRepository: Send + Sync {
    /// Persist a new simulation record
    async fn create(&self, simulation: &NewSimulation) -> Result<Simulation, DomainError>;

    /// Most recent simulations of an owner, newest first
    async fn find_recent_by_owner(
        &self,
        owner: &UserId,
        limit: i64,
    ) -> Result<Vec<Simulation>, DomainError>;
}
