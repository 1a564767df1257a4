//! Interactive trait for components that handle keyboard input
//!
//! The App routes input to the focused component after global keys.

use super::Component;
use crossterm::event::KeyEvent;

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (global handlers: q, ?, Tab, ←/→, 0-6, y)
///    │
///    │ if not handled
///    ▼
/// Focused Component (via Interactive trait)
/// ```
pub trait Interactive: Component {
    /// Returns `Handled::Yes` if the component consumed the event
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Keybind hints for the status bar when focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
