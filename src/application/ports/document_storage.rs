use async_trait::async_trait;

#[derive(Debug)]
pub enum DocumentStorageError {
    FileNotFound(String),
    InvalidPath(String),
    IoError(String),
}

impl std::fmt::Display for DocumentStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStorageError::FileNotFound(path) => write!(f, "File not found: {}", path),
            DocumentStorageError::InvalidPath(path) => write!(f, "Invalid path: {}", path),
            DocumentStorageError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for DocumentStorageError {}

/// Read access to uploaded document bytes.
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    async fn download(&self, storage_path: &str) -> Result<Vec<u8>, DocumentStorageError>;
}
