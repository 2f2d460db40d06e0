//! Input model: mouse buttons, modifier keys, and the keyboard shortcut table.
//!
//! `Button` and `Modifiers` capture what the user pressed at the time of a
//! pointer or keyboard event. `Command` names the editing operations that both
//! the selection menu and the keyboard can trigger, and [`shortcut`] maps a key
//! press onto one of them.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Whether the platform's primary shortcut modifier (Ctrl or Command) is held.
    #[must_use]
    pub fn primary(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code. Back/forward buttons map to `None`.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`, `"c"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// An editing operation on the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Copy the selection into the clipboard.
    Copy,
    /// Paste the clipboard onto the scene.
    Paste,
    /// Remove the selection from the scene.
    Delete,
    /// Flip the selection left-to-right.
    MirrorHorizontally,
    /// Flip the selection top-to-bottom.
    MirrorVertically,
}

/// Resolve a key press to the command it triggers, if any.
///
/// Primary+C copies, Primary+V pastes, and Delete deletes. Letter keys match
/// regardless of case so Shift or Caps Lock do not break the binding.
#[must_use]
pub fn shortcut(key: &Key, modifiers: Modifiers) -> Option<Command> {
    let name = key.0.as_str();
    if name == "Delete" {
        return Some(Command::Delete);
    }
    if !modifiers.primary() {
        return None;
    }
    if name.eq_ignore_ascii_case("c") {
        Some(Command::Copy)
    } else if name.eq_ignore_ascii_case("v") {
        Some(Command::Paste)
    } else {
        None
    }
}
