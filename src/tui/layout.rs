/// Responsive breakpoints and the screen layout built on them.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.
use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100-139 cols: Full terminal
    Wide,
    /// 140+ cols: Ultrawide monitor
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }
}

/// Areas of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub title: Rect,
    pub categories: Rect,
    pub trips: Rect,
    pub detail: Rect,
    pub logs: Rect,
    pub status: Rect,
    /// Trips above detail instead of side by side
    pub stacked: bool,
}

/// Split the terminal into the main screen areas
///
/// ```text
/// ┌ title ─────────────────────────────┐
/// │ Filter by Category: All BEACH ...  │
/// ├ All Trips ──────┬ Details View ────┤
/// │                 │                  │
/// ├ Logs ───────────┴──────────────────┤
/// └ status ────────────────────────────┘
/// ```
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let bp = Breakpoint::from_width(area.width);
    let logs_height = if area.height >= 30 { 8 } else { 5 };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Title
            Constraint::Length(3),           // Category selector
            Constraint::Min(6),              // Trips + detail
            Constraint::Length(logs_height), // Logs
            Constraint::Length(2),           // Status bar
        ])
        .split(area);

    let stacked = !bp.at_least(Breakpoint::Wide);
    let (direction, split) = if stacked {
        (Direction::Vertical, [Constraint::Percentage(40), Constraint::Percentage(60)])
    } else if bp.at_least(Breakpoint::UltraWide) {
        (Direction::Horizontal, [Constraint::Percentage(35), Constraint::Percentage(65)])
    } else {
        (Direction::Horizontal, [Constraint::Percentage(40), Constraint::Percentage(60)])
    };

    let main = Layout::default()
        .direction(direction)
        .constraints(split)
        .split(rows[2]);

    ScreenAreas {
        title: rows[0],
        categories: rows[1],
        trips: main[0],
        detail: main[1],
        logs: rows[3],
        status: rows[4],
        stacked,
    }
}

/// Centered rectangle for overlays, as percentages of `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
