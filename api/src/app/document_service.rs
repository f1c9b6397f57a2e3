//! Document service
//!
//! Validates uploads, stores the bytes, asks the model for a first-pass
//! analysis and persists the record. Analysis failures degrade to a fixed
//! fallback text instead of failing the upload.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Document, DocumentStatus, NewDocument, UserId};
use crate::domain::ports::{DocumentRepository, DocumentStore, TextGenerator};
use crate::error::AppError;

/// Extensions accepted for upload
const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "txt"];

/// Analysis text used when the model is unavailable
const FALLBACK_ANALYSIS: &str = "Documento recebido. Análise detalhada em desenvolvimento.";

/// Service for uploaded tax documents
pub struct DocumentService<DR, DS, AI>
where
    DR: DocumentRepository,
    DS: DocumentStore,
    AI: TextGenerator,
{
    documents: Arc<DR>,
    store: Arc<DS>,
    ai: Arc<AI>,
}

impl<DR, DS, AI> DocumentService<DR, DS, AI>
where
    DR: DocumentRepository,
    DS: DocumentStore,
    AI: TextGenerator,
{
    pub fn new(documents: Arc<DR>, store: Arc<DS>, ai: Arc<AI>) -> Self {
        Self {
            documents,
            store,
            ai,
        }
    }

    /// Validate, store and analyze an uploaded file
    pub async fn upload(
        &self,
        owner: &UserId,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<Document, AppError> {
        if original_filename.is_empty() {
            return Err(AppError::BadRequest(
                "Nenhum arquivo selecionado".to_string(),
            ));
        }
        if !has_allowed_extension(original_filename) {
            return Err(AppError::BadRequest(
                "Tipo de arquivo não permitido".to_string(),
            ));
        }

        let stored_filename = format!("{}_{}", Uuid::new_v4(), sanitize_filename(original_filename));
        self.store.save(&stored_filename, bytes).await?;

        let (analysis, status) = match self.ai.generate(&analysis_prompt(original_filename)).await {
            Ok(text) => (text, DocumentStatus::Analyzed),
            Err(e) => {
                tracing::warn!(error = %e, filename = original_filename, "Document analysis failed");
                (FALLBACK_ANALYSIS.to_string(), DocumentStatus::Uploaded)
            }
        };

        let document = self
            .documents
            .create(&NewDocument {
                owner: *owner,
                original_filename: original_filename.to_string(),
                stored_filename,
                status,
                analysis: Some(analysis),
            })
            .await?;

        Ok(document)
    }

    /// All documents of the caller, newest first
    pub async fn list(&self, owner: &UserId) -> Result<Vec<Document>, AppError> {
        Ok(self.documents.find_by_owner(owner).await?)
    }
}

fn analysis_prompt(filename: &str) -> String {
    format!(
        "Analise este documento relacionado a Imposto de Renda.\n\
         Nome do arquivo: {filename}\n\n\
         Identifique que tipo de documento pode ser (recibo, comprovante de renda, \
         despesa médica, etc.) e extraia informações relevantes se possível."
    )
}

fn has_allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Keep only filesystem-safe characters, the way werkzeug's
/// `secure_filename` does.
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
