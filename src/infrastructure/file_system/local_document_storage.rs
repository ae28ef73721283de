use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::document_storage::{DocumentStorage, DocumentStorageError};

/// Reads uploaded documents from a directory on local disk.
pub struct LocalDocumentStorage {
    base_path: PathBuf,
}

impl LocalDocumentStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub async fn ensure_directory_exists(&self) -> Result<(), DocumentStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| DocumentStorageError::IoError(e.to_string()))
    }

    /// Resolves a storage path under the base directory. Absolute paths and
    /// `..` segments are rejected.
    fn resolve(&self, storage_path: &str) -> Result<PathBuf, DocumentStorageError> {
        let relative = Path::new(storage_path);
        if storage_path.trim().is_empty() {
            return Err(DocumentStorageError::InvalidPath(storage_path.to_string()));
        }

        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => return Err(DocumentStorageError::InvalidPath(storage_path.to_string())),
            }
        }

        Ok(self.base_path.join(relative))
    }
}

#[async_trait]
impl DocumentStorage for LocalDocumentStorage {
    async fn download(&self, storage_path: &str) -> Result<Vec<u8>, DocumentStorageError> {
        let file_path = self.resolve(storage_path)?;

        match fs::read(&file_path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(DocumentStorageError::FileNotFound(storage_path.to_string()))
            }
            Err(e) => Err(DocumentStorageError::IoError(e.to_string())),
        }
    }
}
