//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! Recency queries return entries in reverse insertion order, which keeps
//! "newest first" assertions stable even when two rows share a timestamp.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Conversation, ConversationId, Document, DocumentId, NewConversation, NewDocument, NewSession,
    NewSimulation, NewUser, Session, SessionId, Simulation, SimulationId, User, UserId,
};
use crate::domain::ports::{
    ConversationRepository, DocumentRepository, DocumentStore, SessionRepository,
    SimulationRepository, TextGenerator, UserRepository,
};
use crate::error::{AiError, DomainError};

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    by_email: Arc<RwLock<HashMap<String, UserId>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let by_email = self.by_email.read().unwrap();
        let users = self.users.read().unwrap();
        Ok(by_email.get(email).and_then(|id| users.get(id).cloned()))
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let created = User {
            id: UserId::new(),
            name: user.name.clone(),
            email: user.email.clone(),
            cpf: user.cpf.clone(),
            password_hash: user.password_hash.clone(),
            created_at: Utc::now(),
        };

        let mut users = self.users.write().unwrap();
        let mut by_email = self.by_email.write().unwrap();
        by_email.insert(created.email.clone(), created.id);
        users.insert(created.id, created.clone());

        Ok(created)
    }
}

// ============================================================================
// In-Memory Session Repository
// ============================================================================

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    by_token_hash: Arc<RwLock<HashMap<String, SessionId>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: &NewSession) -> Result<Session, DomainError> {
        let created = Session {
            id: SessionId::new(),
            user_id: session.user_id,
            token_hash: session.token_hash.clone(),
            created_at: Utc::now(),
            expires_at: session.expires_at,
        };

        let mut sessions = self.sessions.write().unwrap();
        let mut by_token_hash = self.by_token_hash.write().unwrap();
        by_token_hash.insert(created.token_hash.clone(), created.id);
        sessions.insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, DomainError> {
        let by_token_hash = self.by_token_hash.read().unwrap();
        let sessions = self.sessions.read().unwrap();
        Ok(by_token_hash
            .get(token_hash)
            .and_then(|id| sessions.get(id).cloned()))
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().unwrap();
        let mut by_token_hash = self.by_token_hash.write().unwrap();
        if let Some(session) = sessions.remove(id) {
            by_token_hash.remove(&session.token_hash);
        }
        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut sessions = self.sessions.write().unwrap();
        let mut by_token_hash = self.by_token_hash.write().unwrap();

        let expired: Vec<SessionId> = sessions
            .values()
            .filter(|s| s.is_expired(now))
            .map(|s| s.id)
            .collect();

        for id in &expired {
            if let Some(session) = sessions.remove(id) {
                by_token_hash.remove(&session.token_hash);
            }
        }

        Ok(expired.len() as u64)
    }
}

// ============================================================================
// In-Memory Conversation Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryConversationRepository {
    conversations: Arc<RwLock<Vec<Conversation>>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn create(&self, conversation: &NewConversation) -> Result<Conversation, DomainError> {
        let created = Conversation {
            id: ConversationId::new(),
            owner: conversation.owner,
            user_message: conversation.user_message.clone(),
            bot_response: conversation.bot_response.clone(),
            created_at: Utc::now(),
        };

        self.conversations.write().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_recent(
        &self,
        owner: Option<&UserId>,
        limit: i64,
    ) -> Result<Vec<Conversation>, DomainError> {
        let conversations = self.conversations.read().unwrap();
        Ok(conversations
            .iter()
            .rev()
            .filter(|c| match owner {
                Some(owner) => c.owner == Some(*owner),
                None => c.owner.is_none(),
            })
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

// ============================================================================
// In-Memory Document Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryDocumentRepository {
    documents: Arc<RwLock<Vec<Document>>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn create(&self, document: &NewDocument) -> Result<Document, DomainError> {
        let created = Document {
            id: DocumentId::new(),
            owner: document.owner,
            original_filename: document.original_filename.clone(),
            stored_filename: document.stored_filename.clone(),
            status: document.status,
            analysis: document.analysis.clone(),
            created_at: Utc::now(),
        };

        self.documents.write().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Document>, DomainError> {
        let documents = self.documents.read().unwrap();
        Ok(documents
            .iter()
            .rev()
            .filter(|d| d.owner == *owner)
            .cloned()
            .collect())
    }
}

// ============================================================================
// In-Memory Simulation Repository
// ============================================================================

#[derive(Default)]
pub struct InMemorySimulationRepository {
    simulations: Arc<RwLock<Vec<Simulation>>>,
}

impl InMemorySimulationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.simulations.read().unwrap().is_empty()
    }
}

#[async_trait]
impl SimulationRepository for InMemorySimulationRepository {
    async fn create(&self, simulation: &NewSimulation) -> Result<Simulation, DomainError> {
        let created = Simulation {
            id: SimulationId::new(),
            owner: simulation.owner,
            annual_income: simulation.annual_income,
            deductions: simulation.deductions,
            dependents: simulation.dependents,
            tax_base: simulation.tax_base,
            rate_percent: simulation.rate_percent,
            tax_due: simulation.tax_due,
            created_at: Utc::now(),
        };

        self.simulations.write().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_recent_by_owner(
        &self,
        owner: &UserId,
        limit: i64,
    ) -> Result<Vec<Simulation>, DomainError> {
        let simulations = self.simulations.read().unwrap();
        Ok(simulations
            .iter()
            .rev()
            .filter(|s| s.owner == *owner)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

// ============================================================================
// Mock Text Generator
// ============================================================================

/// Canned text generator; records every prompt it is asked for
pub struct MockTextGenerator {
    reply: String,
    fail: bool,
    prompts: Arc<RwLock<Vec<String>>>,
}

impl MockTextGenerator {
    pub fn with_reply(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            fail: false,
            prompts: Arc::default(),
        }
    }

    /// A generator whose every call fails
    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
            prompts: Arc::default(),
        }
    }

    /// Handle to the recorded prompts
    pub fn prompts(&self) -> Arc<RwLock<Vec<String>>> {
        self.prompts.clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        self.prompts.write().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(AiError::EmptyResponse);
        }
        Ok(self.reply.clone())
    }
}

// ============================================================================
// Mock Document Store
// ============================================================================

/// Keeps uploaded bytes in memory
#[derive(Default)]
pub struct MockDocumentStore {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved_count(&self) -> usize {
        self.files.read().unwrap().len()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn save(&self, stored_name: &str, bytes: &[u8]) -> Result<(), DomainError> {
        self.files
            .write()
            .unwrap()
            .insert(stored_name.to_string(), bytes.to_vec());
        Ok(())
    }
}
