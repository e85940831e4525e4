//! One-shot storage of generated workbooks

use std::path::PathBuf;

use crate::{
    constants::EXPORT_FILE_ID_LENGTH,
    error::{AppError, AppResult},
    utils::{crypto::generate_secure_token, validation::validate_file_id},
};

/// Directory-backed store for generated credential sheets
#[derive(Debug, Clone)]
pub struct ExportStore {
    dir: PathBuf,
}

impl ExportStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file for `file_id`, rejecting ids that could escape the directory
    pub fn path_for(&self, file_id: &str) -> AppResult<PathBuf> {
        validate_file_id(file_id).map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(self.dir.join(format!("{}.xlsx", file_id)))
    }

    /// Persist a workbook and return its new file id
    pub async fn save(&self, bytes: &[u8]) -> AppResult<String> {
        let file_id = generate_secure_token(EXPORT_FILE_ID_LENGTH);
        let path = self.path_for(&file_id)?;
        tokio::fs::write(&path, bytes).await?;

        tracing::info!(file_id = %file_id, path = %path.display(), "Stored credential workbook");
        Ok(file_id)
    }

    /// Read a workbook and delete it; a second call for the same id fails
    pub async fn take(&self, file_id: &str) -> AppResult<Vec<u8>> {
        let path = self.path_for(file_id)?;
        if !tokio::fs::try_exists(&path).await? {
            return Err(AppError::NotFound("File does not exist".to_string()));
        }

        let bytes = tokio::fs::read(&path).await?;
        tokio::fs::remove_file(&path).await?;

        tracing::info!(file_id = %file_id, "Credential workbook downloaded and removed");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_take_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = ExportStore::new(dir.path());

        let file_id = store.save(b"PK-data").await.unwrap();
        assert_eq!(file_id.len(), EXPORT_FILE_ID_LENGTH);
        assert!(dir.path().join(format!("{}.xlsx", file_id)).exists());

        let bytes = store.take(&file_id).await.unwrap();
        assert_eq!(bytes, b"PK-data");

        let again = store.take(&file_id).await;
        assert!(matches!(again, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_illegal_file_id_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = ExportStore::new(dir.path());

        let err = store.take("../etc/passwd").await.unwrap_err();
        assert_eq!(err.message(), "Illegal file_id");
    }
}
