//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod cipher;
mod codec;
mod filesystem;
mod hasher;

pub use cipher::{Cipher, CipherError};
pub use codec::{CodecError, SnapshotCodec};
pub use filesystem::{FileSystem, FsError};
pub use hasher::{AccessHasher, HashError};
