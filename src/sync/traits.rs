//! Trait abstraction for the submission client to enable mocking in tests

use crate::state::JobRequest;
use async_trait::async_trait;

use super::client::SyncError;

/// The two submission endpoints a finalized request is sent to
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobSync: Send + Sync {
    /// Insert the request as a row in the data store
    async fn sync_store(&self, record: &JobRequest) -> Result<(), SyncError>;

    /// Post the Markdown digest to the hiring channel
    async fn sync_notify(&self, record: &JobRequest) -> Result<(), SyncError>;
}
