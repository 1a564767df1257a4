// Title bar component
//
// App name, API endpoint and a spinner while requests are in flight.
// A failed trip list load is flagged here; details are in the logs panel.

use crate::state::ListStatus;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let failed = app.state.list_status() == ListStatus::Failed;
    let activity = if failed {
        " ✗ trips unavailable (see logs)".to_string()
    } else if app.state.list_status() == ListStatus::Loading {
        format!(" {} loading trips", app.spinner_char())
    } else if app.state.detail_loading() {
        format!(" {} loading details", app.spinner_char())
    } else {
        String::new()
    };

    let title_text = format!(" tripdeck{} ──── {}", activity, app.api_url);

    let title = Paragraph::new(title_text)
        .style(if failed {
            app.theme.error_style()
        } else {
            app.theme.title_style()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
