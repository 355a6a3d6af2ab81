//! Middleware modules.

pub mod access;
pub mod error;
