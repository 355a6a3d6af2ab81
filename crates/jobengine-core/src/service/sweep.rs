//! Per-queue maintenance: purge expired jobs, fail stuck ones, re-sort.

use crate::domain::{JobState, Queue};

/// Outcome of sweeping one queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub removed: usize,
    pub failed: usize,
}

/// Sweep `queue` against `now` (seconds since epoch).
///
/// Each job is judged on its own:
/// - complete/failed and older than its keep window: removed
/// - in progress and older than its timeout window: failed, stamped `now`, kept
/// - queued past its deadline: removed
///
/// Removal is a single compaction pass, then the survivors are re-sorted.
pub fn sweep_queue(queue: &mut Queue, now: i64) -> SweepReport {
    let mut failed = 0;

    let removed = queue.retain_jobs(|job| {
        if job.state.is_terminal() && job.last_updated < now.saturating_sub(job.keep_minutes) {
            false
        } else if job.state == JobState::Inprogress
            && job.last_updated < now.saturating_sub(job.timeout_minutes)
        {
            job.state = JobState::Failed;
            job.last_updated = now;
            failed += 1;
            true
        } else {
            !(job.state == JobState::Queued && now > job.timeout_time)
        }
    });

    queue.sort_by_priority();

    SweepReport { removed, failed }
}
