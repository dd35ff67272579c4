//! Reference submit handler: wait, then echo the values back

use super::traits::SubmitHandler;
use crate::state::FormValues;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::time::Duration;

/// Default simulated round-trip time
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(400);

/// What a handler reports back once a submission completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Pretty JSON of the values that were submitted
    pub body: String,
    pub received_at: DateTime<Local>,
}

/// Sleeps for a fixed delay, then returns the submitted values as JSON
/// for the app to surface in a dialog.
#[derive(Debug, Clone)]
pub struct DelayedNoticeHandler {
    delay: Duration,
}

impl DelayedNoticeHandler {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for DelayedNoticeHandler {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl SubmitHandler for DelayedNoticeHandler {
    async fn submit(&self, values: FormValues) -> Result<SubmitReceipt> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "simulating submit");
        tokio::time::sleep(self.delay).await;
        let body = values
            .to_pretty_json()
            .context("Failed to serialize submitted values")?;
        Ok(SubmitReceipt {
            body,
            received_at: Local::now(),
        })
    }
}
