//! # Jobengine Core
//!
//! The domain layer of Jobengine: queues, jobs, the store that holds them and
//! the services that read and mutate it.
//! This crate contains no concrete I/O; filesystem, hashing, encryption and
//! encoding are reached through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::EngineError;
