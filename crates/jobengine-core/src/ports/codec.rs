use crate::domain::StoreState;

/// Structured serialization of the store contents.
pub trait SnapshotCodec: Send + Sync {
    fn encode(&self, state: &StoreState) -> Result<Vec<u8>, CodecError>;

    fn decode(&self, bytes: &[u8]) -> Result<StoreState, CodecError>;
}

/// Encoding errors.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Encode failed: {0}")]
    Encode(String),

    #[error("Decode failed: {0}")]
    Decode(String),
}
