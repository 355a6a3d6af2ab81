//! Snapshot encodings.

mod json;

pub use json::JsonSnapshotCodec;
