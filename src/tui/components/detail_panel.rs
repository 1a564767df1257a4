//! Detail panel component
//!
//! Shows the trip in the detail slot: fields, guide block and the packing
//! items table. Scrolls vertically; `<`/`>` scroll wide tables sideways.
use super::formatters::packing_table;
use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::trips::display::{
    DetailView, GuideSection, PackingSection, NO_GUIDE, NO_PACKING_ITEMS, NO_SELECTION,
};
use crate::trips::{DisplayOptions, TripDetail};
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct DetailPanel {
    /// Vertical scroll state (manual mode)
    scroll: ScrollState,

    /// Horizontal scroll offset (columns from left)
    horizontal_offset: usize,

    /// Widest content line and the inner width it is shown in
    content_width: usize,
    viewport_width: usize,

    view: Option<DetailView>,
    loading: bool,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
            horizontal_offset: 0,
            content_width: 0,
            viewport_width: 0,
            view: None,
            loading: false,
        }
    }

    /// Sync with the detail slot; call each frame before rendering
    ///
    /// Scroll position resets whenever different content arrives.
    pub fn sync(
        &mut self,
        detail: Option<&TripDetail>,
        loading: bool,
        options: &DisplayOptions,
        area: Rect,
    ) {
        let view = detail.map(|d| DetailView::from_detail(d, options));
        if view != self.view {
            self.view = view;
            self.scroll.reset();
            self.horizontal_offset = 0;
        }
        self.loading = loading;

        let lines = self
            .view
            .as_ref()
            .map(|v| detail_lines(v, &Theme::default()))
            .unwrap_or_default();
        self.content_width = lines.iter().map(Line::width).max().unwrap_or(0);
        self.viewport_width = area.width.saturating_sub(2) as usize;
        self.horizontal_offset = self.horizontal_offset.min(self.max_horizontal_offset());
        self.scroll
            .update_dimensions(lines.len(), area.height.saturating_sub(2) as usize);
    }

    /// Furthest pan that still shows the end of the widest line
    fn max_horizontal_offset(&self) -> usize {
        self.content_width.saturating_sub(self.viewport_width)
    }

    pub fn scroll_left(&mut self) {
        self.horizontal_offset = self.horizontal_offset.saturating_sub(4);
    }

    pub fn scroll_right(&mut self) {
        self.horizontal_offset = self
            .horizontal_offset
            .saturating_add(4)
            .min(self.max_horizontal_offset());
    }
}

impl Default for DetailPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Styled lines of the detail pane
pub fn detail_lines(view: &DetailView, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(view.title.clone(), theme.title_style()), Line::default()];

    for (label, value) in &view.fields {
        let value_style = match *label {
            "Price" => Style::default().fg(theme.price),
            "Category" => Style::default().fg(theme.category),
            _ => Style::default().fg(theme.fg),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", label), theme.label_style()),
            Span::styled(value.clone(), value_style),
        ]));
    }

    lines.push(Line::default());
    match &view.guide {
        GuideSection::Known { .. } => {
            for line in view.guide.lines() {
                match line.split_once(": ") {
                    Some((label, value)) => lines.push(Line::from(vec![
                        Span::styled(format!("{}: ", label), theme.label_style()),
                        Span::styled(value.to_string(), Style::default().fg(theme.fg)),
                    ])),
                    None => lines.push(Line::raw(line)),
                }
            }
        }
        GuideSection::Missing => {
            lines.push(Line::styled(NO_GUIDE, theme.placeholder_style()));
        }
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        "Packing Items",
        Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
    ));

    match &view.packing {
        PackingSection::Empty => {
            lines.push(Line::styled(NO_PACKING_ITEMS, theme.placeholder_style()));
        }
        PackingSection::Rows(rows) => {
            let table = packing_table(rows);
            lines.push(Line::styled(
                table.header,
                theme.label_style().add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::styled(table.separator, theme.border_style(false)));
            for body in table.body {
                lines.push(Line::styled(body, Style::default().fg(theme.fg)));
            }
        }
    }

    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for DetailPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Detail
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let title = if self.loading {
            format!(" Details View {} ", ctx.spinner_char())
        } else {
            " Details View ".to_string()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(ctx.theme.border_style(focused))
            .title(title);

        let Some(view) = &self.view else {
            let placeholder = Paragraph::new(NO_SELECTION)
                .style(ctx.theme.placeholder_style())
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(placeholder, area);
            return;
        };

        let paragraph = Paragraph::new(detail_lines(view, ctx.theme))
            .block(block)
            .scroll((
                u16::try_from(self.scroll.offset()).unwrap_or(u16::MAX),
                u16::try_from(self.horizontal_offset).unwrap_or(u16::MAX),
            ));

        f.render_widget(paragraph, area);
        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Arrows);
    }
}

impl Scrollable for DetailPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Copyable for DetailPanel {
    fn copy_text(&self) -> Option<String> {
        self.view.as_ref().map(|v| v.to_text())
    }

    fn copy_description(&self) -> String {
        "trip details".to_string()
    }
}

impl Interactive for DetailPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => {
                self.scroll_to_top();
                self.horizontal_offset = 0;
            }
            KeyCode::End => self.scroll_to_bottom(),
            KeyCode::Char('<') => self.scroll_left(),
            KeyCode::Char('>') => self.scroll_right(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll  <>:pan  y:copy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::{PackingItem, Trip};
    use chrono::{TimeZone, Utc};
    use crossterm::event::KeyModifiers;

    fn detail(id: i64, items: usize) -> TripDetail {
        TripDetail {
            trip: Trip {
                id,
                name: format!("Trip {}", id),
                starttime: Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap(),
                endtime: Utc.with_ymd_and_hms(2024, 7, 8, 12, 0, 0).unwrap(),
                price: 4500.0,
                category: "FOREST".to_string(),
            },
            guide: None,
            packing_items: (0..items)
                .map(|i| PackingItem {
                    name: format!("Item {}", i),
                    weight_in_grams: 100.0,
                    quantity: 1,
                    description: String::new(),
                    category: "FOREST".to_string(),
                    buying_options: Vec::new(),
                })
                .collect(),
        }
    }

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_lines_contain_placeholders() {
        let view = DetailView::from_detail(&detail(1, 0), &DisplayOptions::default());
        let text = text_of(&detail_lines(&view, &Theme::default()));

        assert_eq!(text[0], "Trip 1");
        assert!(text.contains(&"Guide: Not available".to_string()));
        assert!(text.contains(&"No packing items available".to_string()));
        assert!(text.contains(&"Category: FOREST".to_string()));
    }

    #[test]
    fn test_scroll_resets_when_detail_changes() {
        let mut panel = DetailPanel::new();
        let options = DisplayOptions::default();
        let area = Rect::new(0, 0, 60, 10);

        panel.sync(Some(&detail(1, 30)), false, &options, area);
        panel.handle_key(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE));
        assert!(panel.scroll_state().offset() > 0);

        // Same content: position kept
        panel.sync(Some(&detail(1, 30)), false, &options, area);
        assert!(panel.scroll_state().offset() > 0);

        panel.sync(Some(&detail(2, 30)), false, &options, area);
        assert_eq!(panel.scroll_state().offset(), 0);
    }

    #[test]
    fn test_copy_requires_detail() {
        let mut panel = DetailPanel::new();
        assert!(panel.copy_text().is_none());

        panel.sync(
            Some(&detail(3, 1)),
            false,
            &DisplayOptions::default(),
            Rect::new(0, 0, 60, 20),
        );
        let text = panel.copy_text().unwrap();
        assert!(text.starts_with("Trip 3\n"));
        assert!(text.contains("No buying options"));
    }

    #[test]
    fn test_horizontal_pan_stops_at_widest_line() {
        let mut panel = DetailPanel::new();
        let options = DisplayOptions::default();
        let area = Rect::new(0, 0, 40, 20);
        let wide = detail(5, 2);

        panel.sync(Some(&wide), false, &options, area);
        let view = DetailView::from_detail(&wide, &options);
        let widest = detail_lines(&view, &Theme::default())
            .iter()
            .map(Line::width)
            .max()
            .unwrap();
        assert!(widest > 38);

        for _ in 0..100 {
            panel.handle_key(KeyEvent::new(KeyCode::Char('>'), KeyModifiers::NONE));
        }
        assert_eq!(panel.horizontal_offset, widest - 38);

        // A wider viewport pulls the offset back in
        panel.sync(Some(&wide), false, &options, Rect::new(0, 0, 200, 20));
        assert_eq!(panel.horizontal_offset, 0);

        panel.handle_key(KeyEvent::new(KeyCode::Char('>'), KeyModifiers::NONE));
        assert_eq!(panel.horizontal_offset, 0);
    }
}
