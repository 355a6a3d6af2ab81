use std::path::Path;

use async_trait::async_trait;

/// Filesystem and environment access.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Check whether a file exists at the path.
    async fn file_exists(&self, path: &Path) -> Result<bool, FsError>;

    /// Delete the file at the path.
    async fn delete_file(&self, path: &Path) -> Result<(), FsError>;

    /// Read the whole file.
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError>;

    /// Write the whole file. After this returns the path holds either the
    /// previous content or the new content, never a partial write.
    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<(), FsError>;

    /// Read an environment variable; unset and non-unicode both give `None`.
    fn get_env(&self, name: &str) -> Option<String>;
}

/// Filesystem errors.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

impl FsError {
    pub fn io(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
