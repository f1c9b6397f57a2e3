//! Local filesystem document store

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::ports::DocumentStore;
use crate::error::DomainError;

/// Stores uploaded documents under a local directory
pub struct LocalDocumentStore {
    root: PathBuf,
}

impl LocalDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn save(&self, stored_name: &str, bytes: &[u8]) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| DomainError::Internal(format!("Failed to create upload dir: {}", e)))?;

        tokio::fs::write(self.root.join(stored_name), bytes)
            .await
            .map_err(|e| DomainError::Internal(format!("Failed to write upload: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_writes_the_bytes() {
        let dir = std::env::temp_dir().join(format!("leao-store-{}", uuid::Uuid::new_v4()));
        let store = LocalDocumentStore::new(&dir);

        store.save("recibo.txt", b"conteudo").await.unwrap();

        let written = tokio::fs::read(dir.join("recibo.txt")).await.unwrap();
        assert_eq!(written, b"conteudo");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
