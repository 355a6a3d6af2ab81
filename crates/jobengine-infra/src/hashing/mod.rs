//! Access-key hashing implementations.

mod sha512;

pub use sha512::Sha512Hasher;
