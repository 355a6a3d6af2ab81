//! Background tasks.

mod monitor;

pub use monitor::Monitor;
