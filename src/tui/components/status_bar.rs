// Status bar component
//
// Trip counts, active category and theme, plus key hints for the focused panel.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Adapts to terminal width: full hints when wide, counts only when narrow
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let state = &app.state;

    let counts = format!(
        " {}/{} trips │ {}",
        state.visible_trips().len(),
        state.total_trips(),
        state.selected_category()
    );

    let status_text = if !bp.at_least(Breakpoint::Normal) {
        counts
    } else if !bp.at_least(Breakpoint::Wide) {
        format!("{} │ {} │ q:quit ?:help", counts, app.uptime())
    } else {
        let hint = app.focus_hint().unwrap_or("");
        format!(
            "{} │ {} │ {} │ {}  Tab:focus  t:theme  q:quit  ?:help",
            counts,
            app.theme_kind.name(),
            app.uptime(),
            hint
        )
    };

    let status = Paragraph::new(status_text)
        .style(app.theme.status_style())
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
