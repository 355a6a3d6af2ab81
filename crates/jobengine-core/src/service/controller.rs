//! Queue controller - the sole reader and mutator of the store.
//!
//! Every operation holds the store lock for its whole duration, access-key
//! hashing included. Queue existence is always checked before the key, so a
//! caller can tell "no such queue" apart from "wrong key".

use std::sync::Arc;

use crate::domain::{Job, JobState, Queue, Store, StoreState, unix_now};
use crate::error::{EngineError, EngineResult};
use crate::service::{AccessGuard, SweepReport, sweep_queue};

/// Query and authorization front for the store.
#[derive(Clone)]
pub struct QueueController {
    store: Arc<Store>,
    guard: AccessGuard,
}

fn require(value: &str, what: &str) -> EngineResult<()> {
    if value.is_empty() {
        return Err(EngineError::invalid(format!("{what} must not be empty")));
    }
    Ok(())
}

impl QueueController {
    pub fn new(store: Arc<Store>, guard: AccessGuard) -> Self {
        Self { store, guard }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Look up `name` and check `access_key` against it. Must be called with
    /// the store lock already held.
    fn authorized<'a>(
        &self,
        state: &'a mut StoreState,
        name: &str,
        access_key: &str,
    ) -> EngineResult<&'a mut Queue> {
        let queue = state
            .queues
            .get_mut(name)
            .ok_or_else(|| EngineError::queue_not_found(name))?;
        self.guard.authorize(queue, access_key)?;
        Ok(queue)
    }

    /// Like [`Self::authorized`], but an absent queue is `Ok(None)`.
    fn authorized_opt<'a>(
        &self,
        state: &'a mut StoreState,
        name: &str,
        access_key: &str,
    ) -> EngineResult<Option<&'a mut Queue>> {
        match self.authorized(state, name, access_key) {
            Ok(queue) => Ok(Some(queue)),
            Err(EngineError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create_queue(&self, name: &str, access_key: &str) -> EngineResult<()> {
        require(name, "queue name")?;
        require(access_key, "access key")?;

        let mut state = self.store.lock().await;
        if state.queues.contains_key(name) {
            return Err(EngineError::Conflict(format!("queue '{name}' already exists")));
        }

        let hashed = self.guard.process(access_key)?;
        state.queues.insert(name.to_string(), Queue::new(name, hashed));

        tracing::info!(queue = %name, "Queue created");
        Ok(())
    }

    /// Returns `Ok(None)` when no queue has this name.
    pub async fn get_queue(&self, name: &str, access_key: &str) -> EngineResult<Option<Queue>> {
        require(name, "queue name")?;
        require(access_key, "access key")?;

        let mut state = self.store.lock().await;
        Ok(self
            .authorized_opt(&mut state, name, access_key)?
            .cloned())
    }

    pub async fn delete_queue(&self, name: &str, access_key: &str) -> EngineResult<()> {
        require(name, "queue name")?;
        require(access_key, "access key")?;

        let mut state = self.store.lock().await;
        self.authorized(&mut state, name, access_key)?;
        state.queues.remove(name);

        tracing::info!(queue = %name, "Queue deleted");
        Ok(())
    }

    /// Append `job` to the queue, re-sorting by priority when `sort` is set.
    pub async fn add_job(
        &self,
        job: Job,
        queue_name: &str,
        access_key: &str,
        sort: bool,
    ) -> EngineResult<()> {
        require(&job.uid, "job uid")?;
        require(queue_name, "queue name")?;
        require(access_key, "access key")?;

        let mut state = self.store.lock().await;
        let queue = self.authorized(&mut state, queue_name, access_key)?;

        if queue.find(&job.uid).is_some() {
            return Err(EngineError::Conflict(format!(
                "job '{}' already exists in queue '{queue_name}'",
                job.uid
            )));
        }

        tracing::debug!(
            queue = %queue_name,
            uid = %job.uid,
            priority = job.priority,
            "Job added"
        );
        queue.push(job);
        if sort {
            queue.sort_by_priority();
        }
        Ok(())
    }

    /// Returns `Ok(None)` when the queue or the job is absent.
    pub async fn get_job(
        &self,
        uid: &str,
        queue_name: &str,
        access_key: &str,
    ) -> EngineResult<Option<Job>> {
        require(uid, "job uid")?;
        require(queue_name, "queue name")?;
        require(access_key, "access key")?;

        let mut state = self.store.lock().await;
        Ok(self
            .authorized_opt(&mut state, queue_name, access_key)?
            .and_then(|queue| queue.find(uid).cloned()))
    }

    /// First job from the head that is currently in progress.
    ///
    /// This does not hand out the next queued job. The in-progress match is
    /// kept as-is until the intended dequeue semantics are settled.
    pub async fn get_next_job(
        &self,
        queue_name: &str,
        access_key: &str,
    ) -> EngineResult<Option<Job>> {
        require(queue_name, "queue name")?;
        require(access_key, "access key")?;

        let mut state = self.store.lock().await;
        let queue = self.authorized(&mut state, queue_name, access_key)?;
        Ok(queue
            .jobs
            .iter()
            .find(|job| job.state == JobState::Inprogress)
            .cloned())
    }

    /// All jobs in queue order.
    pub async fn get_all_jobs(
        &self,
        queue_name: &str,
        access_key: &str,
    ) -> EngineResult<Vec<Job>> {
        require(queue_name, "queue name")?;
        require(access_key, "access key")?;

        let mut state = self.store.lock().await;
        let queue = self.authorized(&mut state, queue_name, access_key)?;
        Ok(queue.jobs.clone())
    }

    pub async fn update_job_status(
        &self,
        uid: &str,
        new_status: &str,
        queue_name: &str,
        access_key: &str,
    ) -> EngineResult<()> {
        let new_state: JobState = new_status.parse()?;
        require(uid, "job uid")?;
        require(queue_name, "queue name")?;
        require(access_key, "access key")?;

        let mut state = self.store.lock().await;
        let queue = self.authorized(&mut state, queue_name, access_key)?;
        let job = queue
            .find_mut(uid)
            .ok_or_else(|| EngineError::NotFound(format!("job '{uid}' in queue '{queue_name}'")))?;

        job.state = new_state;
        job.last_updated = unix_now();

        tracing::debug!(
            queue = %queue_name,
            uid = %uid,
            state = %new_state,
            "Job status updated"
        );
        Ok(())
    }

    /// Sweep one queue. Internal maintenance: no access key is checked.
    pub async fn update_queue(&self, queue_name: &str) -> EngineResult<SweepReport> {
        self.update_queue_at(queue_name, unix_now()).await
    }

    pub(crate) async fn update_queue_at(
        &self,
        queue_name: &str,
        now: i64,
    ) -> EngineResult<SweepReport> {
        require(queue_name, "queue name")?;

        let mut state = self.store.lock().await;
        let queue = state
            .queues
            .get_mut(queue_name)
            .ok_or_else(|| EngineError::queue_not_found(queue_name))?;

        Ok(sweep_queue(queue, now))
    }

    /// Names of every queue currently in the store.
    pub async fn queue_names(&self) -> Vec<String> {
        self.store.lock().await.queues.keys().cloned().collect()
    }
}
