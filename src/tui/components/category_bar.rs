// Category selector
//
// "Filter by Category:" followed by every selector value, the current one
// highlighted. Digits 0-6 select directly, ←/→ cycle.

use crate::trips::CategoryFilter;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const LABEL: &str = "Filter by Category:";

/// Spans for the selector line
pub fn category_line(selected: CategoryFilter, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(format!(" {} ", LABEL), theme.label_style())];

    for category in CategoryFilter::ALL {
        let text = format!(" {}:{} ", category.index(), category.label());
        let style = if category == selected {
            theme.selected_style()
        } else {
            Style::default().fg(theme.category)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

pub fn render(f: &mut Frame, area: Rect, selected: CategoryFilter, theme: &Theme) {
    let bar = Paragraph::new(category_line(selected, theme)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(false)),
    );
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_lists_every_category_once() {
        let theme = Theme::default();
        let line = category_line(CategoryFilter::City, &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(text.starts_with(" Filter by Category: "));
        for category in CategoryFilter::ALL {
            assert_eq!(text.matches(category.label()).count(), 1, "{}", category);
        }
    }

    #[test]
    fn test_selected_category_is_highlighted() {
        let theme = Theme::default();
        let line = category_line(CategoryFilter::Snow, &theme);
        let highlighted: Vec<&str> = line
            .spans
            .iter()
            .filter(|s| s.style == theme.selected_style())
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(highlighted, vec![" 3:SNOW "]);
    }
}
