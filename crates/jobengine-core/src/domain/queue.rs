use serde::{Deserialize, Serialize};

use super::Job;

/// A named, access-controlled collection of jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Queue {
    pub name: String,
    /// Hash of the caller's secret; the plaintext is never kept.
    pub access_key: String,
    pub size: usize,
    pub jobs: Vec<Job>,
}

impl Queue {
    pub fn new(name: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access_key: access_key.into(),
            size: 0,
            jobs: Vec::new(),
        }
    }

    pub fn push(&mut self, job: Job) {
        self.jobs.push(job);
        self.size = self.jobs.len();
    }

    /// Order jobs by descending priority. The sort is stable, so equal
    /// priorities keep their insertion order.
    pub fn sort_by_priority(&mut self) {
        self.jobs.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Keep only the jobs for which `keep` returns true, visiting each job
    /// once in order. Returns how many were dropped.
    pub fn retain_jobs<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&mut Job) -> bool,
    {
        let before = self.jobs.len();
        self.jobs.retain_mut(keep);
        self.size = self.jobs.len();
        before - self.size
    }

    pub fn find(&self, uid: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.uid == uid)
    }

    pub fn find_mut(&mut self, uid: &str) -> Option<&mut Job> {
        self.jobs.iter_mut().find(|job| job.uid == uid)
    }
}
