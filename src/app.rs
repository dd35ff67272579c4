//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, Form, FormButton, Submission, SubmitNotice, SubmitOutcome};
use crate::submit::{SubmitHandler, SubmitReceipt};
use crate::ui::{signup_presenters, Presenter};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Window for the second Ctrl+C press that quits
const DOUBLE_TAP_WINDOW: Duration = Duration::from_secs(1);

/// Completion message sent back by a submission task
struct Completion {
    ticket: u64,
    result: Result<SubmitReceipt>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Presenters for the form's fields, in focus order
    pub presenters: Vec<Presenter>,
    pub config: TuiConfig,
    handler: Arc<dyn SubmitHandler>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    /// Task running the submit handler, aborted on reset or drop
    in_flight: Option<JoinHandle<()>>,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Mount a fresh signup form
    pub fn new(config: TuiConfig, handler: Arc<dyn SubmitHandler>) -> Self {
        let state = AppState::default();
        let presenters = signup_presenters(state.form.controller.schema());
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        Self {
            state,
            presenters,
            config,
            handler,
            completions_tx,
            completions_rx,
            in_flight: None,
            quit: false,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission task is running
    pub fn is_submitting(&self) -> bool {
        self.state.form.controller.is_submitting()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Submission notice (modal)
        if self.state.notice.is_some() {
            self.handle_notice_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }

        self.handle_form_key(key);
        Ok(())
    }

    /// Keys while the submitted values are on screen
    fn handle_notice_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.state.notice = None;
            }
            KeyCode::Char('c') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_notice();
            }
            KeyCode::Char('y') => self.copy_notice(),
            _ => {}
        }
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(previous) if now.duration_since(previous) <= DOUBLE_TAP_WINDOW => {
                self.quit = true;
            }
            _ => {
                self.last_ctrl_c = Some(now);
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    /// Handle keys on the signup form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let on_action_panel = self.state.form.is_buttons_row_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('r') if ctrl => self.reset(),
            // Up/Down pick a button on the action panel
            KeyCode::Up | KeyCode::Char('k') if on_action_panel => self.state.form.prev_button(),
            KeyCode::Down | KeyCode::Char('j') if on_action_panel => {
                self.state.form.next_button()
            }
            KeyCode::Enter if on_action_panel => match self.state.form.selected() {
                FormButton::Submit => self.submit(),
                FormButton::Reset => self.reset(),
            },
            // Up/Down elsewhere move between fields
            KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Down => self.state.form.next_field(),
            _ if !on_action_panel => {
                if !self.route_to_presenter(key) && key.code == KeyCode::Enter {
                    // Enter inside an input submits, as in a browser form
                    self.submit();
                }
            }
            _ => {}
        }
    }

    /// Give the key to the focused field's presenter
    fn route_to_presenter(&mut self, key: KeyEvent) -> bool {
        let index = self.state.form.active_field();
        let Some(presenter) = self.presenters.get(index) else {
            return false;
        };
        match self.state.form.bind_active() {
            Some(mut binding) => presenter.handle_key(key, &mut binding),
            None => false,
        }
    }

    /// Submit the form; spawns the handler when the values are valid
    pub fn submit(&mut self) {
        match self.state.form.controller.submit() {
            SubmitOutcome::Started(submission) => self.start_submission(submission),
            SubmitOutcome::Rejected(errors) => {
                tracing::info!(invalid = errors.len(), "submit blocked by validation");
                self.state.status_message =
                    Some(format!("{} field(s) need attention", errors.len()));
            }
            SubmitOutcome::Busy => {}
        }
    }

    fn start_submission(&mut self, submission: Submission) {
        let Submission { ticket, values } = submission;
        let handler = Arc::clone(&self.handler);
        let tx = self.completions_tx.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let result = handler.submit(values).await;
            if tx.send(Completion { ticket, result }).is_err() {
                tracing::debug!(ticket, "form unmounted before submission completed");
            }
        }));
    }

    /// Reset the form, abandoning any in-flight submission
    pub fn reset(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
        self.state.form.controller.reset();
        self.state.status_message = Some("Form reset".to_string());
    }

    /// Apply finished submissions. Returns true if anything changed.
    pub fn poll_completions(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.completions_rx.try_recv() {
            changed |= self.apply_completion(completion);
        }
        changed
    }

    fn apply_completion(&mut self, completion: Completion) -> bool {
        if !self.state.form.controller.finish_submission(completion.ticket) {
            return false;
        }
        self.in_flight = None;

        match completion.result {
            Ok(receipt) => {
                self.state.notice = Some(SubmitNotice {
                    body: receipt.body,
                    received_at: receipt.received_at.format("%H:%M:%S").to_string(),
                });
                self.state.status_message = Some("Submitted".to_string());
            }
            Err(err) => self.push_error(format!("Submit failed: {err:#}")),
        }
        true
    }

    fn copy_notice(&mut self) {
        let Some(body) = self.state.notice.as_ref().map(|n| n.body.clone()) else {
            return;
        };
        match copy_to_clipboard(&body) {
            Ok(()) => self.state.status_message = Some("Copied to clipboard".to_string()),
            Err(err) => self.push_error(format!("{err:#}")),
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // The form is going away; a late completion must not outlive it
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text)
        .context("Failed to copy to clipboard")?;
    Ok(())
}

#[cfg(test)]
impl App {
    /// App whose handler answers without delay
    pub fn for_tests() -> Self {
        Self::new(
            TuiConfig::default(),
            Arc::new(crate::submit::DelayedNoticeHandler::new(Duration::ZERO)),
        )
    }

    /// Wait for the in-flight submission (if any) and apply its completion
    pub async fn settle(&mut self) {
        if let Some(task) = self.in_flight.take() {
            let _ = task.await;
        }
        self.poll_completions();
    }
}
