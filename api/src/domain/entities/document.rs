//! Document domain entity
//!
//! An uploaded tax document plus the model's first-pass analysis of it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Unique identifier for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for DocumentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Processing status of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Stored, but the AI analysis did not complete
    Uploaded,
    /// Stored and analyzed by the model
    Analyzed,
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStatus::Uploaded => write!(f, "uploaded"),
            DocumentStatus::Analyzed => write!(f, "analyzed"),
        }
    }
}

impl std::str::FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uploaded" => Ok(DocumentStatus::Uploaded),
            "analyzed" => Ok(DocumentStatus::Analyzed),
            _ => Err(format!("Unknown document status: {}", s)),
        }
    }
}

/// An uploaded document record
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: DocumentId,
    pub owner: UserId,
    pub original_filename: String,
    /// Unique name under the upload directory (`<uuid>_<sanitized>`)
    pub stored_filename: String,
    pub status: DocumentStatus,
    pub analysis: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data needed to persist a new document
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub owner: UserId,
    pub original_filename: String,
    pub stored_filename: String,
    pub status: DocumentStatus,
    pub analysis: Option<String>,
}
