//! Domain entities - queues, jobs and the store that owns them.

mod job;
mod queue;
mod store;

pub use job::{Job, JobState};
pub use queue::Queue;
pub use store::{Store, StoreState};

/// Current time as whole seconds since the Unix epoch.
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
