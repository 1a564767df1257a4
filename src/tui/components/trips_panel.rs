//! Trip list component
//!
//! Shows the filtered trips as cards with a cursor. `Enter` on the cursor
//! activates the trip; the App turns that into a detail request. The trip
//! whose details were last requested is marked with `●`.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::trips::display::{TripCard, NO_TRIPS};
use crate::trips::{DisplayOptions, Trip, TripId};
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Lines per card: name, four fields, spacer
const CARD_HEIGHT: usize = 6;

/// One row of the list
#[derive(Debug, Clone, PartialEq)]
pub struct TripRow {
    pub id: TripId,
    pub card: TripCard,
}

pub struct TripsPanel {
    scroll: ScrollState,
    selected: Option<usize>,
    rows: Vec<TripRow>,
    active_id: Option<TripId>,
    loading: bool,
    compact: bool,
}

impl TripsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
            selected: None,
            rows: Vec::new(),
            active_id: None,
            loading: false,
            compact: false,
        }
    }

    /// Sync with the filtered trips; call each frame before rendering
    pub fn sync(
        &mut self,
        trips: &[Trip],
        active_id: Option<TripId>,
        loading: bool,
        options: &DisplayOptions,
        area: Rect,
    ) {
        self.rows = trips
            .iter()
            .map(|trip| TripRow {
                id: trip.id,
                card: TripCard::from_trip(trip, options),
            })
            .collect();
        self.active_id = active_id;
        self.loading = loading;

        let inner_height = area.height.saturating_sub(2) as usize;
        self.compact = inner_height < CARD_HEIGHT * 2 || area.width < 30;
        let item_height = if self.compact { 1 } else { CARD_HEIGHT };
        self.scroll
            .update_dimensions(self.rows.len(), inner_height / item_height);

        self.selected = match self.selected {
            _ if self.rows.is_empty() => None,
            Some(idx) => Some(idx.min(self.rows.len() - 1)),
            None => Some(0),
        };
        if let Some(idx) = self.selected {
            self.scroll.ensure_visible(idx);
        }
    }

    /// Forget the cursor (the list was re-filtered)
    pub fn reset(&mut self) {
        self.selected = None;
        self.scroll.reset();
    }

    /// Trip under the cursor
    pub fn selected_trip_id(&self) -> Option<TripId> {
        self.selected
            .and_then(|idx| self.rows.get(idx))
            .map(|row| row.id)
    }

    fn card_item(&self, row: &TripRow, is_cursor: bool, ctx: &RenderContext) -> ListItem<'static> {
        let theme = ctx.theme;
        let marker = if self.active_id == Some(row.id) { "● " } else { "  " };

        let name_style = if is_cursor {
            theme.selected_style()
        } else {
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)
        };

        if self.compact {
            return ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(row.card.summary_line(), name_style),
            ]));
        }

        let mut lines = vec![Line::from(vec![
            Span::raw(marker),
            Span::styled(row.card.name.clone(), name_style),
        ])];
        for (label, value) in row.card.fields() {
            let value_style = if label == "Price" {
                Style::default().fg(theme.price)
            } else {
                Style::default().fg(theme.fg)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("    {}: ", label), theme.label_style()),
                Span::styled(value.to_string(), value_style),
            ]));
        }
        lines.push(Line::default());

        ListItem::new(Text::from(lines))
    }
}

impl Default for TripsPanel {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for TripsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Trips
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let title = if self.loading {
            format!(" All Trips {} ", ctx.spinner_char())
        } else {
            format!(" All Trips ({}) ", self.rows.len())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(ctx.theme.border_style(focused))
            .title(title);

        if self.rows.is_empty() {
            let placeholder = Paragraph::new(NO_TRIPS)
                .style(ctx.theme.placeholder_style())
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(placeholder, area);
            return;
        }

        let (start, end) = self.scroll.visible_range();
        let items: Vec<ListItem> = self.rows[start..end]
            .iter()
            .enumerate()
            .map(|(i, row)| self.card_item(row, focused && self.selected == Some(start + i), ctx))
            .collect();

        f.render_widget(List::new(items).block(block), area);
        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Minimal);
    }
}

impl Scrollable for TripsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for TripsPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        let idx = index.min(self.rows.len().saturating_sub(1));
        self.selected = Some(idx);
        self.scroll.ensure_visible(idx);
    }

    fn item_count(&self) -> usize {
        self.rows.len()
    }
}

impl Copyable for TripsPanel {
    fn copy_text(&self) -> Option<String> {
        let row = self.selected.and_then(|idx| self.rows.get(idx))?;
        let mut text = row.card.name.clone();
        for (label, value) in row.card.fields() {
            text.push_str(&format!("\n{}: {}", label, value));
        }
        Some(text)
    }

    fn copy_description(&self) -> String {
        "trip".to_string()
    }
}

impl Interactive for TripsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let page = self.scroll.viewport().max(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Handled::Yes
            }
            KeyCode::Home => {
                self.select_first();
                Handled::Yes
            }
            KeyCode::End => {
                self.select_last();
                Handled::Yes
            }
            KeyCode::PageUp => {
                if let Some(idx) = self.selected {
                    self.select(idx.saturating_sub(page));
                }
                Handled::Yes
            }
            KeyCode::PageDown => {
                if let Some(idx) = self.selected {
                    self.select(idx + page);
                }
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:move  Enter:details  ←→/0-6:category  y:copy")
    }
}
