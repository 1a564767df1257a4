//! Copyable trait for components that provide clipboard content

use super::Component;

/// Content for the `y` keybind
pub trait Copyable: Component {
    /// Human-readable text, `None` when there is nothing to copy
    fn copy_text(&self) -> Option<String>;

    /// What will be copied, for the toast message
    fn copy_description(&self) -> String {
        format!("{:?}", self.id()).to_lowercase()
    }
}
