//! HTTP client for the data store and the chat notification
//!
//! Submission is best-effort: each endpoint is tried exactly once per
//! request, failures are logged and never surfaced back into the form.

use crate::config::Config;
use crate::state::JobRequest;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use super::payload::{JobRequestRow, Notification};
use super::traits::JobSync;

/// Per-request ceiling so a dead endpoint cannot hang the submission
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure of a single submission endpoint
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Transport-level failure: connect, DNS, timeout
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered, but not with success
    #[error("endpoint returned {status}")]
    Status { status: reqwest::StatusCode },
}

/// Client holding the endpoint credentials and a pooled HTTP client
pub struct SyncClient {
    client: reqwest::Client,
    config: Config,
}

impl SyncClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    fn check(status: reqwest::StatusCode) -> Result<(), SyncError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(SyncError::Status { status })
        }
    }
}

#[async_trait]
impl JobSync for SyncClient {
    async fn sync_store(&self, record: &JobRequest) -> Result<(), SyncError> {
        let response = self
            .client
            .post(self.config.store_endpoint())
            .header("apikey", &self.config.supabase_key)
            .bearer_auth(&self.config.supabase_key)
            .header("Prefer", "return=minimal")
            .json(&JobRequestRow::from_record(record))
            .send()
            .await?;
        Self::check(response.status())
    }

    async fn sync_notify(&self, record: &JobRequest) -> Result<(), SyncError> {
        let response = self
            .client
            .post(self.config.notify_endpoint())
            .json(&Notification::new(&self.config.telegram_chat_id, record))
            .send()
            .await?;
        Self::check(response.status())
    }
}

/// Send a finalized request to both endpoints concurrently.
///
/// Waits for both outcomes; a failure on either side is logged and
/// swallowed so the form always reaches the confirmation screen.
pub async fn dispatch_all(sync: &dyn JobSync, record: &JobRequest) {
    let (store, notify) = tokio::join!(sync.sync_store(record), sync.sync_notify(record));
    match store {
        Ok(()) => tracing::debug!("Data store sync ok"),
        Err(e) => tracing::warn!(error = %e, "Data store sync failed"),
    }
    match notify {
        Ok(()) => tracing::debug!("Notification sync ok"),
        Err(e) => tracing::warn!(error = %e, "Notification sync failed"),
    }
}
