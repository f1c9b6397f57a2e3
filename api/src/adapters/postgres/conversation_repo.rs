//! PostgreSQL adapter for ConversationRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Conversation, ConversationId, NewConversation, UserId};
use crate::domain::ports::ConversationRepository;
use crate::entity::conversations;
use crate::error::DomainError;

/// PostgreSQL implementation of ConversationRepository
pub struct PostgresConversationRepository {
    db: DatabaseConnection,
}

impl PostgresConversationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConversationRepository for PostgresConversationRepository {
    async fn create(&self, conversation: &NewConversation) -> Result<Conversation, DomainError> {
        let model = conversations::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(conversation.owner.map(|o| o.0)),
            user_message: Set(conversation.user_message.clone()),
            bot_response: Set(conversation.bot_response.clone()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_recent(
        &self,
        owner: Option<&UserId>,
        limit: i64,
    ) -> Result<Vec<Conversation>, DomainError> {
        let query = conversations::Entity::find();
        let query = match owner {
            Some(owner) => query.filter(conversations::Column::UserId.eq(owner.0)),
            None => query.filter(conversations::Column::UserId.is_null()),
        };

        let results = query
            .order_by_desc(conversations::Column::CreatedAt)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<conversations::Model> for Conversation {
    fn from(model: conversations::Model) -> Self {
        Conversation {
            id: ConversationId(model.id),
            owner: model.user_id.map(UserId),
            user_message: model.user_message,
            bot_response: model.bot_response,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
