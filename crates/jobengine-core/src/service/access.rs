//! Access-key checks in hashed form.

use std::sync::Arc;

use crate::domain::Queue;
use crate::error::{EngineError, EngineResult};
use crate::ports::AccessHasher;

/// Authorizes queue operations by comparing hashed secrets.
#[derive(Clone)]
pub struct AccessGuard {
    hasher: Arc<dyn AccessHasher>,
}

impl AccessGuard {
    pub fn new(hasher: Arc<dyn AccessHasher>) -> Self {
        Self { hasher }
    }

    /// Hash a caller secret. A hashing failure is an internal error, never
    /// a mismatch.
    pub fn process(&self, secret: &str) -> EngineResult<String> {
        Ok(self.hasher.process(secret)?)
    }

    pub fn authorize(&self, queue: &Queue, secret: &str) -> EngineResult<()> {
        if self.process(secret)? == queue.access_key {
            Ok(())
        } else {
            tracing::debug!(queue = %queue.name, "Access key mismatch");
            Err(EngineError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{FailingHasher, PlainHasher};

    #[test]
    fn test_authorize_matching_key() {
        let guard = AccessGuard::new(Arc::new(PlainHasher));
        let queue = Queue::new("orders", guard.process("secret1").unwrap());
        assert!(guard.authorize(&queue, "secret1").is_ok());
    }

    #[test]
    fn test_authorize_wrong_key() {
        let guard = AccessGuard::new(Arc::new(PlainHasher));
        let queue = Queue::new("orders", guard.process("secret1").unwrap());
        assert!(matches!(
            guard.authorize(&queue, "secret2"),
            Err(EngineError::Unauthorized)
        ));
    }

    #[test]
    fn test_hash_failure_is_internal() {
        let guard = AccessGuard::new(Arc::new(FailingHasher));
        let queue = Queue::new("orders", "anything");
        assert!(matches!(
            guard.authorize(&queue, "secret1"),
            Err(EngineError::Internal(_))
        ));
    }
}
