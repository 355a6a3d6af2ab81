//! Domain-level error types.

use thiserror::Error;

use crate::ports::{CipherError, CodecError, FsError, HashError};

/// Engine errors - every failure a controller or snapshot operation can report.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn queue_not_found(name: &str) -> Self {
        Self::NotFound(format!("queue '{name}'"))
    }
}

impl From<HashError> for EngineError {
    fn from(err: HashError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<CipherError> for EngineError {
    fn from(err: CipherError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<FsError> for EngineError {
    fn from(err: FsError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<CodecError> for EngineError {
    fn from(err: CodecError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
