use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Lifecycle state of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Queued,
    Inprogress,
    Complete,
    Failed,
}

impl JobState {
    pub const ALL: [JobState; 4] = [
        JobState::Queued,
        JobState::Inprogress,
        JobState::Complete,
        JobState::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::Queued => "queued",
            JobState::Inprogress => "inprogress",
            JobState::Complete => "complete",
            JobState::Failed => "failed",
        }
    }

    /// Complete and failed jobs only wait for their keep window to lapse.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Complete | JobState::Failed)
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobState {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| EngineError::invalid(format!("unknown job status '{s}'")))
    }
}

/// A unit of work held in a queue.
///
/// `keep_minutes` and `timeout_minutes` are compared directly against
/// second-resolution timestamps by the sweeper, with no unit conversion.
/// Whether they were meant as minutes is unresolved; the stored value is
/// effectively a number of seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Caller-supplied identifier, unique within its queue.
    pub uid: String,
    pub state: JobState,
    /// Higher values sit nearer the head of the queue.
    pub priority: i64,
    /// Seconds since epoch of the last state transition.
    pub last_updated: i64,
    /// Retention window once the job is complete or failed.
    pub keep_minutes: i64,
    /// How long the job may stay in progress before it is failed.
    pub timeout_minutes: i64,
    /// Absolute deadline (seconds since epoch) for a job still queued.
    pub timeout_time: i64,
    /// Opaque payload, never inspected by the engine.
    #[serde(default)]
    pub content: serde_json::Value,
}

impl Job {
    /// Create a queued job stamped with the current time.
    pub fn new(uid: impl Into<String>, priority: i64) -> Self {
        Self {
            uid: uid.into(),
            state: JobState::Queued,
            priority,
            last_updated: super::unix_now(),
            keep_minutes: 0,
            timeout_minutes: 0,
            timeout_time: i64::MAX,
            content: serde_json::Value::Null,
        }
    }

    pub fn with_keep_minutes(mut self, keep: i64) -> Self {
        self.keep_minutes = keep;
        self
    }

    pub fn with_timeout_minutes(mut self, timeout: i64) -> Self {
        self.timeout_minutes = timeout;
        self
    }

    pub fn with_timeout_time(mut self, deadline: i64) -> Self {
        self.timeout_time = deadline;
        self
    }

    pub fn with_content(mut self, content: serde_json::Value) -> Self {
        self.content = content;
        self
    }
}
