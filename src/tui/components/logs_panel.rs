//! Logs panel component
//!
//! Displays the captured log entries, color-coded by level. Follows new
//! entries until the user selects one; `Esc` returns to follow mode.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::logging::{LogEntry, LogLevel};
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    /// Scroll state (position, viewport, auto-follow)
    scroll: ScrollState,

    /// Selected log entry index (None = auto-follow mode)
    selected: Option<usize>,

    /// Snapshot of the log buffer taken at the last sync
    entries: Vec<LogEntry>,
}

impl LogsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
            selected: None,
            entries: Vec::new(),
        }
    }

    /// Update with current log entries (call each frame)
    pub fn sync(&mut self, entries: Vec<LogEntry>, viewport_height: usize) {
        self.scroll.update_dimensions(entries.len(), viewport_height);

        if let Some(idx) = self.selected {
            if idx >= entries.len() {
                self.selected = entries.len().checked_sub(1);
            }
        }
        self.entries = entries;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let (start, end) = self.scroll.visible_range();

        let items: Vec<ListItem> = self.entries[start..end]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if focused && self.selected == Some(start + i) {
                    ctx.theme.selected_style()
                } else {
                    log_level_style(entry.level, ctx.theme)
                };
                ListItem::new(format_log_entry(entry)).style(style)
            })
            .collect();

        let title = if self.selected.is_some() && focused {
            " System Logs [select] "
        } else if self.scroll.auto_follow {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ctx.theme.border_type)
                .border_style(ctx.theme.border_style(focused))
                .title(title),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Minimal);
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for LogsPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        let idx = index.min(self.entries.len().saturating_sub(1));
        self.selected = Some(idx);
        // A pinned view would scroll the selection away
        self.scroll.auto_follow = false;
        self.scroll.ensure_visible(idx);
    }

    fn item_count(&self) -> usize {
        self.entries.len()
    }

    /// First selection starts from the most recent entry
    fn select_next(&mut self) {
        match self.selected {
            Some(idx) if idx + 1 < self.entries.len() => self.select(idx + 1),
            None if !self.entries.is_empty() => self.select(self.entries.len() - 1),
            _ => {}
        }
    }

    fn select_previous(&mut self) {
        match self.selected {
            Some(idx) if idx > 0 => self.select(idx - 1),
            None if !self.entries.is_empty() => self.select(self.entries.len() - 1),
            _ => {}
        }
    }
}

impl Copyable for LogsPanel {
    fn copy_text(&self) -> Option<String> {
        self.selected
            .and_then(|idx| self.entries.get(idx))
            .map(format_log_entry)
    }

    fn copy_description(&self) -> String {
        "log entry".to_string()
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Esc => {
                if self.selected.is_none() {
                    return Handled::No;
                }
                self.selected = None;
                self.scroll.scroll_to_bottom();
                self.scroll.auto_follow = true;
            }
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  y:copy  Esc:follow")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ═══════════════════════════════════════════════════════════════════════════

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.log_error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.log_warn),
        LogLevel::Info => Style::default().fg(theme.log_info),
        LogLevel::Debug => Style::default().fg(theme.log_debug),
        LogLevel::Trace => Style::default().fg(theme.log_trace),
    }
}
