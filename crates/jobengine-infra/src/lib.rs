//! # Jobengine Infrastructure
//!
//! Concrete implementations of the ports defined in `jobengine-core`.
//!
//! - `hashing` - SHA-512 access-key hashing
//! - `crypto` - AES-256-GCM snapshot encryption, keyed through Argon2
//! - `filesystem` - tokio-backed filesystem with atomic writes
//! - `codec` - JSON snapshot encoding

pub mod codec;
pub mod crypto;
pub mod filesystem;
pub mod hashing;

pub use codec::JsonSnapshotCodec;
pub use crypto::AesGcmCipher;
pub use filesystem::OsFileSystem;
pub use hashing::Sha512Hasher;
