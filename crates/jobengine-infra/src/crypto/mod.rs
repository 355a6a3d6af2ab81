//! Encryption implementations.

mod aes;

pub use aes::AesGcmCipher;
