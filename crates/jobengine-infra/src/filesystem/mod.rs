//! Filesystem implementations.

mod os;

pub use os::OsFileSystem;
