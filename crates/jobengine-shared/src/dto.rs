//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQueueRequest {
    pub name: String,
    pub access_key: String,
}

/// Public view of a queue. The hashed access key is never sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueResponse {
    pub name: String,
    pub size: usize,
}

/// Request to add a job. Omitted fields fall back to server defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddJobRequest {
    /// Generated when absent.
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub keep_minutes: Option<i64>,
    #[serde(default)]
    pub timeout_minutes: Option<i64>,
    /// Absolute deadline, seconds since epoch.
    #[serde(default)]
    pub timeout_time: Option<i64>,
    #[serde(default)]
    pub content: Option<serde_json::Value>,
    /// Re-sort the queue after inserting. Defaults to true.
    #[serde(default)]
    pub sort: Option<bool>,
}

/// Request to move a job to another state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateJobStatusRequest {
    pub status: String,
}

/// A job as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResponse {
    pub uid: String,
    pub state: String,
    pub priority: i64,
    pub last_updated: i64,
    pub keep_minutes: i64,
    pub timeout_minutes: i64,
    pub timeout_time: i64,
    pub content: serde_json::Value,
}
