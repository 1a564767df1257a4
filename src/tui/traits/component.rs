//! Core component trait
//!
//! Every UI element that can be rendered implements `Component`.

use crate::tui::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a focusable panel
///
/// Used for focus tracking and copy descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Filtered trip list
    Trips,
    /// Selected trip details
    Detail,
    /// System logs panel
    Logs,
}

impl ComponentId {
    /// Cycle to next panel (Tab behavior)
    pub fn next_focus(self) -> Self {
        match self {
            Self::Trips => Self::Detail,
            Self::Detail => Self::Logs,
            Self::Logs => Self::Trips,
        }
    }

    /// Cycle to previous panel (Shift+Tab behavior)
    pub fn prev_focus(self) -> Self {
        match self {
            Self::Trips => Self::Logs,
            Self::Detail => Self::Trips,
            Self::Logs => Self::Detail,
        }
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need; no access to mutable app state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Animation frame counter (for spinners)
    pub animation_frame: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId, animation_frame: usize) -> Self {
        Self {
            theme,
            focus,
            animation_frame,
        }
    }

    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }

    /// Get spinner character for current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

/// Base trait for all UI components
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_visits_every_panel() {
        let mut id = ComponentId::Trips;
        let mut seen = vec![id];
        for _ in 0..2 {
            id = id.next_focus();
            seen.push(id);
        }
        assert_eq!(
            seen,
            vec![ComponentId::Trips, ComponentId::Detail, ComponentId::Logs]
        );
        assert_eq!(id.next_focus(), ComponentId::Trips);
    }

    #[test]
    fn test_prev_focus_inverts_next() {
        for id in [ComponentId::Trips, ComponentId::Detail, ComponentId::Logs] {
            assert_eq!(id.next_focus().prev_focus(), id);
        }
    }
}
