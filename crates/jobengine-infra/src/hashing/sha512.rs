//! SHA-512 access-key hasher.

use sha2::{Digest, Sha512};

use jobengine_core::ports::{AccessHasher, HashError};

/// Hex-encoded SHA-512 of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512Hasher;

impl AccessHasher for Sha512Hasher {
    fn process(&self, input: &str) -> Result<String, HashError> {
        let mut hasher = Sha512::new();
        hasher.update(input.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        let hash = Sha512Hasher.process("abc").unwrap();
        assert_eq!(
            hash,
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn test_deterministic_and_distinct() {
        let a = Sha512Hasher.process("secret1").unwrap();
        assert_eq!(a, Sha512Hasher.process("secret1").unwrap());
        assert_ne!(a, Sha512Hasher.process("secret2").unwrap());
        assert_ne!(a, "secret1");
    }
}
