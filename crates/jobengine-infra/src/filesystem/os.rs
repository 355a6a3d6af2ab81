//! Operating-system filesystem on top of `tokio::fs`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use jobengine_core::ports::{FileSystem, FsError};

/// Local disk access. Writes go to a sibling temp file that is then renamed
/// over the target, so readers never see a half-written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl OsFileSystem {
    async fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut file = tokio::fs::File::create(path).await?;
        file.write_all(data).await?;
        file.sync_all().await
    }
}

#[async_trait]
impl FileSystem for OsFileSystem {
    async fn file_exists(&self, path: &Path) -> Result<bool, FsError> {
        tokio::fs::try_exists(path)
            .await
            .map_err(|e| FsError::io(path, e))
    }

    async fn delete_file(&self, path: &Path) -> Result<(), FsError> {
        tokio::fs::remove_file(path)
            .await
            .map_err(|e| FsError::io(path, e))
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        tokio::fs::read(path).await.map_err(|e| FsError::io(path, e))
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| FsError::io(parent, e))?;
        }

        let tmp = temp_path(path);
        let written = match Self::write_synced(&tmp, data).await {
            Ok(()) => tokio::fs::rename(&tmp, path).await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            if let Err(cleanup) = self.delete_file(&tmp).await {
                tracing::debug!(error = %cleanup, "Temp file cleanup failed");
            }
            return Err(FsError::io(path, e));
        }
        Ok(())
    }

    fn get_env(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
