/// One-way hashing of caller secrets.
pub trait AccessHasher: Send + Sync {
    /// Hash the input. Equal inputs must give equal outputs.
    fn process(&self, input: &str) -> Result<String, HashError>;
}

/// Hashing errors.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("Hashing failed: {0}")]
    Failed(String),
}
