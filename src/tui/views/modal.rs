// Modal overlay rendering
//
// Modals are rendered on top of the main screen. Only the help overlay
// exists: key bindings plus the active endpoint and theme.

use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::modal::Modal;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
    }
}

fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.category);
    let desc_style = Style::default().fg(theme.fg);
    let header_style = theme.title_style();
    let divider_style = Style::default().fg(theme.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Trips", header_style)),
        kb("↑/↓, j/k", "Move cursor / scroll"),
        kb("Enter", "Show details of the trip under the cursor"),
        kb("Home/End", "Jump to start/end"),
        kb("PgUp/PgDn", "Page up/down"),
        Line::raw(""),
        Line::from(Span::styled("  Categories", header_style)),
        kb("←/→, h/l", "Previous / next category"),
        kb("0-6", "All, BEACH, CITY, SNOW, LAKE, FOREST, SEA"),
        Line::raw(""),
        Line::from(Span::styled("  Panels", header_style)),
        kb("Tab", "Cycle panel focus"),
        kb("Shift+Tab", "Focus previous panel"),
        kb("</>", "Pan the details table"),
        kb("Esc", "Logs: back to follow mode"),
        kb("y", "Copy focused content"),
        kb("t", "Next theme"),
        Line::raw(""),
        Line::from(Span::styled("  ─────────────────────────────────", divider_style)),
        Line::from(vec![
            Span::styled("    API     ", key_style),
            Span::styled(app.api_url.clone(), desc_style),
        ]),
        Line::from(vec![
            Span::styled("    Theme   ", key_style),
            Span::styled(app.theme_kind.name(), desc_style),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "  ?/Esc to close, q to quit",
            Style::default()
                .fg(theme.placeholder)
                .add_modifier(Modifier::ITALIC),
        )),
    ]);

    let area = centered_rect(60, 80, f.area());
    f.render_widget(Clear, area);

    let help = Paragraph::new(content).style(theme.base_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(true))
            .title(" Help "),
    );
    f.render_widget(help, area);
}
