//! Trait abstraction for the submit handler to enable mocking in tests

use super::handler::SubmitReceipt;
use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;

/// Receives a frozen copy of validated form values.
///
/// The controller stays in the submitting state until the returned future
/// resolves, whether it succeeds or fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    /// Handle one submission
    async fn submit(&self, values: FormValues) -> Result<SubmitReceipt>;
}
