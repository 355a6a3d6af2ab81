//! Periodic sweep and snapshot loop.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info};

use jobengine_core::EngineError;
use jobengine_core::service::{QueueController, SnapshotManager};

/// What one monitor cycle did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub queues: usize,
    pub removed: usize,
    pub failed: usize,
    pub saved: bool,
}

/// Sweeps every queue and then snapshots the store, on a fixed interval.
pub struct Monitor {
    controller: QueueController,
    snapshots: SnapshotManager,
    period: Duration,
}

impl Monitor {
    pub fn new(controller: QueueController, snapshots: SnapshotManager, period: Duration) -> Self {
        Self {
            controller,
            snapshots,
            period,
        }
    }

    /// Run until `shutdown` flips to true or its sender is dropped, then run
    /// one last cycle so the final state reaches disk.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        info!(interval_secs = self.period.as_secs(), "Monitor started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.run_cycle().await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Monitor received shutdown signal, writing final snapshot");
        let report = self.run_cycle().await;
        info!(saved = report.saved, "Monitor stopped");
    }

    /// Sweep every queue, then save. Failures are logged and never abort
    /// the cycle.
    pub async fn run_cycle(&self) -> CycleReport {
        let mut report = CycleReport::default();

        for name in self.controller.queue_names().await {
            match self.controller.update_queue(&name).await {
                Ok(sweep) => {
                    report.queues += 1;
                    report.removed += sweep.removed;
                    report.failed += sweep.failed;
                    if sweep.removed > 0 || sweep.failed > 0 {
                        debug!(
                            queue = %name,
                            removed = sweep.removed,
                            failed = sweep.failed,
                            "Queue swept"
                        );
                    }
                }
                // Deleted between listing and sweeping.
                Err(EngineError::NotFound(_)) => {}
                Err(e) => error!(queue = %name, error = %e, "Queue sweep failed"),
            }
        }

        match self.snapshots.save_to_file(self.controller.store()).await {
            Ok(()) => report.saved = true,
            Err(e) => error!(
                path = %self.snapshots.path().display(),
                error = %e,
                "Snapshot save failed"
            ),
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    use jobengine_core::domain::{Job, JobState, Store};
    use jobengine_core::service::AccessGuard;
    use jobengine_infra::{AesGcmCipher, JsonSnapshotCodec, OsFileSystem, Sha512Hasher};

    use super::*;

    fn snapshots(path: PathBuf) -> SnapshotManager {
        SnapshotManager::new(
            Arc::new(OsFileSystem),
            Arc::new(AesGcmCipher::from_secret("testsecret").unwrap()),
            Arc::new(JsonSnapshotCodec),
            path,
        )
    }

    async fn monitor(path: &Path, period: Duration) -> Monitor {
        let controller = QueueController::new(
            Arc::new(Store::new()),
            AccessGuard::new(Arc::new(Sha512Hasher)),
        );
        controller.create_queue("orders", "secret1").await.unwrap();

        let mut done = Job::new("done", 1);
        done.state = JobState::Complete;
        done.last_updated = 0;
        controller.add_job(done, "orders", "secret1", true).await.unwrap();
        controller
            .add_job(Job::new("waiting", 5), "orders", "secret1", true)
            .await
            .unwrap();

        Monitor::new(controller, snapshots(path.to_path_buf()), period)
    }

    async fn load(path: &Path) -> Store {
        let store = Store::new();
        assert!(snapshots(path.to_path_buf()).load_from_file(&store).await.unwrap());
        store
    }

    #[tokio::test]
    async fn test_cycle_sweeps_then_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.queuedb");
        let monitor = monitor(&path, Duration::from_secs(60)).await;

        let report = monitor.run_cycle().await;

        assert_eq!(
            report,
            CycleReport {
                queues: 1,
                removed: 1,
                failed: 0,
                saved: true,
            }
        );
        let state = load(&path).await.snapshot().await;
        let jobs = &state.queues["orders"].jobs;
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].uid, "waiting");
    }

    #[tokio::test]
    async fn test_failed_save_does_not_stop_the_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        let monitor = monitor(&blocker.join("database.queuedb"), Duration::from_secs(60)).await;

        let first = monitor.run_cycle().await;
        let second = monitor.run_cycle().await;

        assert!(!first.saved);
        assert!(!second.saved);
        assert_eq!(first.removed, 1);
        assert_eq!(second.queues, 1);
    }

    #[tokio::test]
    async fn test_shutdown_writes_final_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.queuedb");
        let monitor = monitor(&path, Duration::from_secs(3600)).await;

        let (tx, rx) = watch::channel(false);
        let task = tokio::spawn(monitor.run(rx));
        tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(10), task)
            .await
            .expect("monitor did not stop")
            .unwrap();

        let state = load(&path).await.snapshot().await;
        assert_eq!(state.queues["orders"].jobs.len(), 1);
    }

    #[tokio::test]
    async fn test_periodic_cycle_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.queuedb");
        let monitor = monitor(&path, Duration::from_millis(50)).await;

        let (tx, rx) = watch::channel(false);
        let task = tokio::spawn(monitor.run(rx));

        let mut written = false;
        for _ in 0..100 {
            if tokio::fs::try_exists(&path).await.unwrap() {
                written = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        drop(tx);
        task.await.unwrap();

        assert!(written);
    }
}
