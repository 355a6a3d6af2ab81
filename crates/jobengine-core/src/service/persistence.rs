//! Snapshot persistence: encode, encrypt and write the store, or the reverse.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::Store;
use crate::error::EngineResult;
use crate::ports::{Cipher, FileSystem, SnapshotCodec};

/// Reads and writes encrypted store snapshots at a fixed path.
#[derive(Clone)]
pub struct SnapshotManager {
    fs: Arc<dyn FileSystem>,
    cipher: Arc<dyn Cipher>,
    codec: Arc<dyn SnapshotCodec>,
    path: PathBuf,
}

impl SnapshotManager {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        cipher: Arc<dyn Cipher>,
        codec: Arc<dyn SnapshotCodec>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            cipher,
            codec,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> EngineResult<bool> {
        Ok(self.fs.file_exists(&self.path).await?)
    }

    /// Write the whole store to disk.
    ///
    /// The lock is held only while the state is copied; encoding, encryption
    /// and the write happen after it is released.
    pub async fn save_to_file(&self, store: &Store) -> EngineResult<()> {
        let state = store.snapshot().await;

        let encoded = self.codec.encode(&state)?;
        let sealed = self.cipher.encrypt(&encoded)?;
        self.fs.write_file(&self.path, &sealed).await?;

        tracing::debug!(
            path = %self.path.display(),
            queues = state.queues.len(),
            bytes = sealed.len(),
            "Snapshot saved"
        );
        Ok(())
    }

    /// Load the snapshot into `store`, replacing its contents.
    ///
    /// Returns `Ok(false)` and leaves the store untouched when there is no
    /// snapshot file.
    pub async fn load_from_file(&self, store: &Store) -> EngineResult<bool> {
        if !self.fs.file_exists(&self.path).await? {
            return Ok(false);
        }

        let sealed = self.fs.read_file(&self.path).await?;
        let encoded = self.cipher.decrypt(&sealed)?;
        let state = self.codec.decode(&encoded)?;

        tracing::info!(
            path = %self.path.display(),
            queues = state.queues.len(),
            "Snapshot loaded"
        );
        store.replace(state).await;
        Ok(true)
    }
}
