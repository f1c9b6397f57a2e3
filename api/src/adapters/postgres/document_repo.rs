//! PostgreSQL adapter for DocumentRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Document, DocumentId, DocumentStatus, NewDocument, UserId};
use crate::domain::ports::DocumentRepository;
use crate::entity::documents;
use crate::error::DomainError;

/// PostgreSQL implementation of DocumentRepository
pub struct PostgresDocumentRepository {
    db: DatabaseConnection,
}

impl PostgresDocumentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentRepository for PostgresDocumentRepository {
    async fn create(&self, document: &NewDocument) -> Result<Document, DomainError> {
        let model = documents::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(document.owner.0),
            original_filename: Set(document.original_filename.clone()),
            stored_filename: Set(document.stored_filename.clone()),
            status: Set(document.status.to_string()),
            analysis: Set(document.analysis.clone()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Document>, DomainError> {
        let results = documents::Entity::find()
            .filter(documents::Column::UserId.eq(owner.0))
            .order_by_desc(documents::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<documents::Model> for Document {
    fn from(model: documents::Model) -> Self {
        Document {
            id: DocumentId(model.id),
            owner: UserId(model.user_id),
            original_filename: model.original_filename,
            stored_filename: model.stored_filename,
            status: model.status.parse().unwrap_or(DocumentStatus::Uploaded),
            analysis: model.analysis,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
