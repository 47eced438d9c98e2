//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the secondary submit shortcut (Cmd+W / Ctrl+W)
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ALT_SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ALT_SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

pub const ADD_STOP_SHORTCUT: &str = "Ctrl+A";

pub const REMOVE_STOP_SHORTCUT: &str = "Ctrl+R";
