//! Services - the only code that reads or mutates the store.

mod access;
mod controller;
mod persistence;
mod sweep;

#[cfg(test)]
pub(crate) mod testing;

pub use access::AccessGuard;
pub use controller::QueueController;
pub use persistence::SnapshotManager;
pub use sweep::{SweepReport, sweep_queue};
