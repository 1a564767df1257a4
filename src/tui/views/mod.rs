// Views module - screen-level rendering logic
//
// One screen: title, category selector, trip list beside (or above) the
// detail view, system logs and status bar. Overlays draw last.

mod modal;

use super::app::App;
use super::components::{category_bar, status_bar, title_bar};
use super::layout::screen_areas;
use super::traits::{Component, RenderContext};
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
///
/// Syncs each panel with the current state and its area first, so scroll
/// bounds always match what is drawn.
pub fn draw(f: &mut Frame, app: &mut App) {
    f.render_widget(Block::default().style(app.theme.base_style()), f.area());

    let areas = screen_areas(f.area());

    app.trips_panel.sync(
        app.state.visible_trips(),
        app.state.selected_trip_id(),
        app.state.list_status() == crate::state::ListStatus::Loading,
        &app.display,
        areas.trips,
    );
    app.detail_panel.sync(
        app.state.detail(),
        app.state.detail_loading(),
        &app.display,
        areas.detail,
    );
    app.logs_panel.sync(
        app.log_buffer.get_all(),
        areas.logs.height.saturating_sub(2) as usize,
    );

    let app = &*app;
    let ctx = RenderContext::new(&app.theme, app.focus, app.animation_frame);

    title_bar::render(f, areas.title, app);
    category_bar::render(f, areas.categories, app.state.selected_category(), &app.theme);
    app.trips_panel.render(f, areas.trips, &ctx);
    app.detail_panel.render(f, areas.detail, &ctx);
    app.logs_panel.render(f, areas.logs, &ctx);
    status_bar::render(f, areas.status, app);

    if let Some(ref m) = app.modal {
        modal::render(f, m, app);
    }

    // Toast stays on top of the modal
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
