//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for copy shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset shortcut display for form help text
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Copy shortcut display for the submission dialog
/// - macOS: "Cmd+C"
/// - Linux/Windows: "Ctrl+C" (only while the dialog is open; quits otherwise)
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+C";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "Ctrl+C";
