//! Document handlers
//!
//! Multipart upload plus the caller's document listing. Both require a
//! logged-in user.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Serialize;

use crate::auth::SessionIdentity;
use crate::domain::entities::Document;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct UploadedDocumentDto {
    pub id: String,
    pub filename: String,
    pub upload_date: String,
    pub analysis: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub document: UploadedDocumentDto,
}

/// POST /api/documents/upload
///
/// Multipart form with a single `file` field.
pub async fn upload_document(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file = Some((filename, bytes.to_vec()));
        }
    }

    let (filename, bytes) = file.ok_or_else(|| {
        AppError::BadRequest("Nenhum arquivo enviado".to_string())
    })?;

    let document = state
        .document_service
        .upload(&identity.user.id, &filename, &bytes)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Documento enviado com sucesso!".to_string(),
            document: UploadedDocumentDto {
                id: document.id.to_string(),
                filename: document.original_filename,
                upload_date: document.created_at.to_rfc3339(),
                analysis: document.analysis,
            },
        }),
    ))
}

#[derive(Debug, Serialize)]
pub struct DocumentDto {
    pub id: String,
    pub original_filename: String,
    pub stored_filename: String,
    pub status: String,
    pub analysis: Option<String>,
    pub upload_date: String,
}

impl From<Document> for DocumentDto {
    fn from(document: Document) -> Self {
        DocumentDto {
            id: document.id.to_string(),
            original_filename: document.original_filename,
            stored_filename: document.stored_filename,
            status: document.status.to_string(),
            analysis: document.analysis,
            upload_date: document.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentDto>,
}

/// GET /api/documents
pub async fn list_documents(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
) -> Result<Json<DocumentListResponse>, AppError> {
    let documents = state.document_service.list(&identity.user.id).await?;

    Ok(Json(DocumentListResponse {
        documents: documents.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DocumentId, DocumentStatus, UserId};
    use chrono::Utc;

    #[test]
    fn document_dto_excludes_owner_and_uses_wire_names() {
        let document = Document {
            id: DocumentId::new(),
            owner: UserId::new(),
            original_filename: "recibo.pdf".to_string(),
            stored_filename: "abc_recibo.pdf".to_string(),
            status: DocumentStatus::Analyzed,
            analysis: Some("Recibo médico".to_string()),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(DocumentDto::from(document)).unwrap();
        assert_eq!(value["status"], "analyzed");
        assert_eq!(value["original_filename"], "recibo.pdf");
        assert!(value.get("owner").is_none());
        assert!(value.get("user_id").is_none());
    }
}
