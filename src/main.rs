//! Signup TUI - a terminal signup form
//!
//! Renders a five-field signup form with per-field validation and a
//! simulated asynchronous submit, using Ratatui on a crossterm backend.

mod app;
mod config;
mod platform;
mod state;
mod submit;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::TuiConfig;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use std::time::Duration;
use submit::DelayedNoticeHandler;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fatal startup conditions of the application shell
#[derive(Debug, Error)]
enum ShellError {
    #[error("no display surface: stdout is not an interactive terminal")]
    NoTerminal,
}

/// Poll interval while a submission is in flight
const FAST_POLL: Duration = Duration::from_millis(50);
/// Poll interval otherwise
const IDLE_POLL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    let config = TuiConfig::load().context("Failed to load configuration")?;

    // Initialize logging. Logs share the terminal with the UI, so they stay
    // off unless asked for or stderr is redirected.
    let default_filter = config.log_filter.clone().unwrap_or_else(|| {
        if io::stderr().is_terminal() {
            "off".to_string()
        } else {
            "signup_tui=info".to_string()
        }
    });
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // The form needs somewhere to mount; fail before touching the terminal
    if !io::stdout().is_terminal() {
        return Err(ShellError::NoTerminal.into());
    }

    let handler = Arc::new(DelayedNoticeHandler::new(config.submit_delay()));
    let mut app = App::new(config, handler);

    // Setup terminal; the guard restores it however we leave from here on
    enable_raw_mode()?;
    let guard = TerminalGuard;
    let mut terminal = setup_terminal(io::stdout())?;
    tracing::info!("signup form mounted");

    let result = run_app(&mut terminal, &mut app);

    // Unmount: aborts any in-flight submission
    drop(app);
    drop(guard);

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Leaves raw mode and the alternate screen when dropped
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!(%err, "failed to disable raw mode");
        }
        if let Err(err) = restore_screen(&mut io::stdout()) {
            tracing::warn!(%err, "failed to leave the alternate screen");
        }
    }
}

fn setup_terminal<W: Write>(mut out: W) -> Result<Terminal<CrosstermBackend<W>>> {
    execute!(out, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(out))?)
}

fn restore_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Pick up finished submissions before drawing
        app.poll_completions();

        terminal.draw(|frame| ui::draw(frame, app))?;

        let poll_duration = if app.is_submitting() {
            FAST_POLL
        } else {
            IDLE_POLL
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on the next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that rejects everything, like a closed terminal
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_setup_failure_is_returned() {
        assert!(setup_terminal(BrokenPipe).is_err());
    }

    #[test]
    fn test_restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "{written:?}");
        assert!(written.contains("\x1b[?25h"), "{written:?}");
    }
}
