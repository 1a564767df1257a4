// TUI application state
//
// Wraps the AppState record with everything that only matters on screen:
// focus, panels, theme, modal and toast. The runtime loop in `tui::mod`
// owns the App and is the only writer.

use super::components::detail_panel::DetailPanel;
use super::components::logs_panel::LogsPanel;
use super::components::trips_panel::TripsPanel;
use super::components::Toast;
use super::modal::Modal;
use super::theme::{Theme, ThemeKind};
use super::traits::{ComponentId, Copyable, Handled, Interactive};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::state::{AppState, Effect, Message};
use crate::trips::DisplayOptions;
use crossterm::event::KeyEvent;
use std::time::Instant;

/// Braille spinner frames for in-flight requests
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct App {
    /// Trips, category and detail slot
    pub state: AppState,

    /// Panel receiving keys that no global binding claims
    pub focus: ComponentId,

    pub trips_panel: TripsPanel,
    pub detail_panel: DetailPanel,
    pub logs_panel: LogsPanel,

    /// Active overlay; swallows all input while open
    pub modal: Option<Modal>,

    /// Transient notification (copy results)
    pub toast: Option<Toast>,

    pub theme_kind: ThemeKind,
    pub theme: Theme,

    pub display: DisplayOptions,

    /// Shared with the tracing layer
    pub log_buffer: LogBuffer,

    /// Shown in the title bar
    pub api_url: String,

    pub should_quit: bool,

    /// Advances on every tick; drives spinners
    pub animation_frame: usize,

    started: Instant,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using {}", config.theme, ThemeKind::default().name());
            ThemeKind::default()
        });

        Self {
            state: AppState::new(config.detail.stale_responses),
            focus: ComponentId::Trips,
            trips_panel: TripsPanel::new(),
            detail_panel: DetailPanel::new(),
            logs_panel: LogsPanel::new(),
            modal: None,
            toast: None,
            theme_kind,
            theme: theme_kind.theme(),
            display: config.display.clone(),
            log_buffer,
            api_url: config.api_url.clone(),
            should_quit: false,
            animation_frame: 0,
            started: Instant::now(),
        }
    }

    /// Effects to run once the event loop is up
    pub fn start(&mut self) -> Vec<Effect> {
        self.state.start()
    }

    /// Feed a message to the state record
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        let resets_list = matches!(
            message,
            Message::SelectCategory(_) | Message::NextCategory | Message::PrevCategory
        );
        let effects = self.state.update(message);
        if resets_list {
            self.trips_panel.reset();
        }
        effects
    }

    /// Request details for the trip under the list cursor
    pub fn activate_selected(&mut self) -> Vec<Effect> {
        match self.trips_panel.selected_trip_id() {
            Some(id) => self.update(Message::ActivateTrip(id)),
            None => Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next_focus();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev_focus();
    }

    /// Route a key to the focused panel
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focus {
            ComponentId::Trips => self.trips_panel.handle_key(key),
            ComponentId::Detail => self.detail_panel.handle_key(key),
            ComponentId::Logs => self.logs_panel.handle_key(key),
        }
    }

    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focus {
            ComponentId::Trips => self.trips_panel.focus_hint(),
            ComponentId::Detail => self.detail_panel.focus_hint(),
            ComponentId::Logs => self.logs_panel.focus_hint(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Clipboard and toast
    // ─────────────────────────────────────────────────────────────────────

    /// Copy the focused panel's content to the clipboard
    pub fn copy_current(&mut self) {
        let (text, what) = match self.focus {
            ComponentId::Trips => (
                self.trips_panel.copy_text(),
                self.trips_panel.copy_description(),
            ),
            ComponentId::Detail => (
                self.detail_panel.copy_text(),
                self.detail_panel.copy_description(),
            ),
            ComponentId::Logs => (
                self.logs_panel.copy_text(),
                self.logs_panel.copy_description(),
            ),
        };

        match text {
            Some(text) => {
                let result = super::clipboard::copy_to_clipboard(&text);
                self.show_toast(super::clipboard::copy_outcome_message(&what, &result));
            }
            None => self.show_toast(format!("Nothing to copy ({} not selected)", what)),
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Ticks and presentation
    // ─────────────────────────────────────────────────────────────────────

    /// Advance animations and drop expired toasts
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.started.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }

    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        tracing::debug!("Theme switched to {}", self.theme_kind.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::{CategoryFilter, Trip};
    use chrono::{TimeZone, Utc};
    use ratatui::layout::Rect;

    fn trip(id: i64, category: &str) -> Trip {
        Trip {
            id,
            name: format!("Trip {}", id),
            starttime: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            endtime: Utc.with_ymd_and_hms(2024, 3, 3, 12, 0, 0).unwrap(),
            price: 800.0,
            category: category.to_string(),
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(&Config::default(), LogBuffer::new());
        app.start();
        app.update(Message::TripsLoaded(Ok(vec![
            trip(1, "BEACH"),
            trip(2, "CITY"),
            trip(3, "CITY"),
        ])));
        sync_trips(&mut app);
        app
    }

    fn sync_trips(app: &mut App) {
        let trips = app.state.visible_trips().to_vec();
        app.trips_panel.sync(
            &trips,
            app.state.selected_trip_id(),
            false,
            &app.display,
            Rect::new(0, 0, 60, 40),
        );
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let config = Config {
            theme: "neon".to_string(),
            ..Config::default()
        };
        let app = App::new(&config, LogBuffer::new());
        assert_eq!(app.theme_kind, ThemeKind::Dark);
    }

    #[test]
    fn test_activate_selected_requests_detail() {
        let mut app = loaded_app();
        let effects = app.activate_selected();
        assert!(matches!(
            effects.as_slice(),
            [Effect::LoadDetail(req)] if req.id == 1
        ));
        assert!(app.state.detail_loading());
    }

    #[test]
    fn test_category_change_resets_cursor() {
        let mut app = loaded_app();
        app.update(Message::SelectCategory(CategoryFilter::City));
        sync_trips(&mut app);
        assert_eq!(app.trips_panel.selected_trip_id(), Some(2));
    }

    #[test]
    fn test_focus_cycles_between_panels() {
        let mut app = loaded_app();
        app.focus_next();
        assert_eq!(app.focus, ComponentId::Detail);
        app.focus_next();
        assert_eq!(app.focus, ComponentId::Logs);
        app.focus_prev();
        app.focus_prev();
        assert_eq!(app.focus, ComponentId::Trips);
    }

    #[test]
    fn test_copy_without_selection_shows_toast() {
        let mut app = loaded_app();
        app.focus = ComponentId::Detail;
        app.copy_current();
        let toast = app.toast.as_ref().unwrap();
        assert!(toast.message.starts_with("Nothing to copy"));
    }

    #[test]
    fn test_spinner_advances_with_ticks() {
        let mut app = loaded_app();
        let first = app.spinner_char();
        app.tick();
        assert_ne!(app.spinner_char(), first);
    }
}
