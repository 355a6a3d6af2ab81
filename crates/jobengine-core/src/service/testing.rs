//! Test doubles for the ports.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::StoreState;
use crate::ports::{
    AccessHasher, Cipher, CipherError, CodecError, FileSystem, FsError, HashError, SnapshotCodec,
};

/// Deterministic, obviously-not-secure hasher.
pub struct PlainHasher;

impl PlainHasher {
    pub fn expected(input: &str) -> String {
        format!("hashed:{}", input.chars().rev().collect::<String>())
    }
}

impl AccessHasher for PlainHasher {
    fn process(&self, input: &str) -> Result<String, HashError> {
        Ok(Self::expected(input))
    }
}

pub struct FailingHasher;

impl AccessHasher for FailingHasher {
    fn process(&self, _input: &str) -> Result<String, HashError> {
        Err(HashError::Failed("test error".into()))
    }
}

/// Reverses the bytes and prepends a marker; decrypt checks the marker.
pub struct ReverseCipher;

const MARKER: &[u8] = b"REV1";

impl Cipher for ReverseCipher {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut out = MARKER.to_vec();
        out.extend(plaintext.iter().rev());
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        let body = ciphertext
            .strip_prefix(MARKER)
            .ok_or_else(|| CipherError::Decrypt("missing marker".into()))?;
        Ok(body.iter().rev().copied().collect())
    }
}

pub struct JsonCodec;

impl SnapshotCodec for JsonCodec {
    fn encode(&self, state: &StoreState) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(state).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<StoreState, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}

/// In-memory filesystem.
#[derive(Default)]
pub struct MemoryFs {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
    fail_writes: bool,
}

impl MemoryFs {
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn put(&self, path: &Path, data: Vec<u8>) {
        self.files.lock().unwrap().insert(path.to_path_buf(), data);
    }

    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

#[async_trait]
impl FileSystem for MemoryFs {
    async fn file_exists(&self, path: &Path) -> Result<bool, FsError> {
        Ok(self.files.lock().unwrap().contains_key(path))
    }

    async fn delete_file(&self, path: &Path) -> Result<(), FsError> {
        self.files
            .lock()
            .unwrap()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::io(path, "no such file"))
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        self.contents(path)
            .ok_or_else(|| FsError::io(path, "no such file"))
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        if self.fail_writes {
            return Err(FsError::io(path, "disk full"));
        }
        self.put(path, data.to_vec());
        Ok(())
    }

    fn get_env(&self, _name: &str) -> Option<String> {
        None
    }
}
