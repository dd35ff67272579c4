//! Application state definitions

use super::forms::SignupForm;
use std::collections::VecDeque;

/// A submission result surfaced to the user in a blocking dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitNotice {
    /// Pretty JSON of the submitted values
    pub body: String,
    /// Local time the handler completed, already formatted
    pub received_at: String,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The mounted signup form
    pub form: SignupForm,
    /// Queued error messages, shown one at a time
    pub errors: VecDeque<String>,
    /// Submission result awaiting dismissal
    pub notice: Option<SubmitNotice>,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Push an error message onto the queue
    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "error queued");
        self.errors.push_back(message);
    }

    /// Whether an error dialog is showing
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently displayed
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Dismiss the error currently displayed
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Whether any modal dialog is open
    pub fn has_modal(&self) -> bool {
        self.has_errors() || self.notice.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_errors());
        state.push_error("first".into());
        state.push_error("second".into());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_dismiss_on_empty_queue_is_noop() {
        let mut state = AppState::default();
        state.dismiss_error();
        assert!(!state.has_modal());
    }

    #[test]
    fn test_notice_counts_as_modal() {
        let state = AppState {
            notice: Some(SubmitNotice {
                body: "{}".into(),
                received_at: "12:00:00".into(),
            }),
            ..Default::default()
        };
        assert!(state.has_modal());
        assert!(!state.has_errors());
    }
}
