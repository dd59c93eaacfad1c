//! Dual-endpoint submission: data store insert plus channel notification

mod client;
mod payload;
mod traits;

pub use client::{dispatch_all, SyncClient, SyncError};
pub use traits::JobSync;

#[cfg(test)]
pub use traits::MockJobSync;
