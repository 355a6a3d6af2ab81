//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;

use jobengine_core::domain::Store;
use jobengine_core::ports::{Cipher, FileSystem};
use jobengine_core::service::{AccessGuard, QueueController, SnapshotManager};
use jobengine_infra::{JsonSnapshotCodec, Sha512Hasher};

use crate::config::{AppConfig, JobDefaults};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub controller: QueueController,
    pub snapshots: SnapshotManager,
    pub job_defaults: JobDefaults,
}

impl AppState {
    /// Wire an empty store to the given filesystem and cipher.
    pub fn new(config: &AppConfig, fs: Arc<dyn FileSystem>, cipher: Arc<dyn Cipher>) -> Self {
        let store = Arc::new(Store::new());
        let controller = QueueController::new(store, AccessGuard::new(Arc::new(Sha512Hasher)));
        let snapshots =
            SnapshotManager::new(fs, cipher, Arc::new(JsonSnapshotCodec), config.db_path.clone());

        Self {
            controller,
            snapshots,
            job_defaults: config.job_defaults,
        }
    }

    /// Load the existing snapshot, or write an empty one if there is none.
    ///
    /// Any failure here must stop startup: an unreadable snapshot is never
    /// overwritten with an empty store.
    pub async fn restore(&self) -> anyhow::Result<()> {
        let path = self.snapshots.path().display().to_string();
        let store = self.controller.store();

        let exists = self
            .snapshots
            .exists()
            .await
            .with_context(|| format!("Error locating database file {path}"))?;

        if exists {
            self.snapshots
                .load_from_file(store)
                .await
                .with_context(|| format!("Unable to load database file {path}"))?;
            tracing::info!(path = %path, "Database loaded");
        } else {
            self.snapshots
                .save_to_file(store)
                .await
                .with_context(|| format!("Unable to create database file {path}"))?;
            tracing::info!(path = %path, "Database created");
        }

        Ok(())
    }
}
