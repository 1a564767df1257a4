// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, API completions)
// - Running the effects requested by the state record

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod views;

use crate::api::TripClient;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::state::{Effect, Message};
use crate::trips::CategoryFilter;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use traits::ComponentId;

/// Capacity of the completion channel
const MESSAGE_CHANNEL_SIZE: usize = 64;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    let client = TripClient::new(&config.api_url).context("Failed to create API client")?;

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer);
    tracing::info!(
        "Using trip API at {} (stale detail responses: {})",
        client.base_url(),
        app.state.stale_policy().as_str()
    );

    let result = run_event_loop(&mut terminal, &mut app, &client).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with `tokio::select!`:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (spinners, toast expiry)
/// 3. Completions of API requests spawned by `execute_effects`
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &TripClient,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_SIZE);
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    execute_effects(app.start(), client, &tx);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        let effects = tokio::select! {
            // Keyboard or mouse input
            effects = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => return handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
                Vec::new()
            } => effects,

            _ = tick_interval.tick() => {
                app.tick();
                Vec::new()
            }

            Some(message) = rx.recv() => app.update(message),
        };

        execute_effects(effects, client, &tx);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Spawn one task per effect; each reports back through `tx`
///
/// Completions are delivered in whatever order the requests finish.
pub fn execute_effects(effects: Vec<Effect>, client: &TripClient, tx: &mpsc::Sender<Message>) {
    for effect in effects {
        let client = client.clone();
        let tx = tx.clone();
        match effect {
            Effect::LoadTrips => {
                tokio::spawn(async move {
                    let result = client.fetch_all_trips().await;
                    let _ = tx.send(Message::TripsLoaded(result)).await;
                });
            }
            Effect::LoadDetail(request) => {
                tokio::spawn(async move {
                    let result = client.fetch_trip_detail(request.id).await;
                    let _ = tx
                        .send(Message::DetailLoaded {
                            seq: request.seq,
                            result,
                        })
                        .await;
                });
            }
        }
    }
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Component
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Vec<Effect> {
    // Release and repeat events would double every action on terminals that send them
    if key.kind != KeyEventKind::Press {
        return Vec::new();
    }

    // Layer 1: Modal captures all input when active
    if let Some(modal) = app.modal.as_mut() {
        if modal.handle_input(key.code) == ModalAction::Close {
            app.modal = None;
        }
        return Vec::new();
    }

    // Layer 2: Global keys
    if let Some(effects) = handle_global_keys(app, &key) {
        return effects;
    }

    // Layer 3: Focused component
    if !app.dispatch_to_focused(key).was_handled() {
        tracing::trace!("Unhandled key {:?} in {:?}", key.code, app.focus);
    }
    Vec::new()
}

/// Returns `None` when the key is not a global binding
fn handle_global_keys(app: &mut App, key: &KeyEvent) -> Option<Vec<Effect>> {
    let effects = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            Vec::new()
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            Vec::new()
        }
        KeyCode::Char('?') => {
            app.modal = Some(Modal::help());
            Vec::new()
        }
        KeyCode::Tab => {
            app.focus_next();
            Vec::new()
        }
        KeyCode::BackTab => {
            app.focus_prev();
            Vec::new()
        }
        KeyCode::Left | KeyCode::Char('h') => app.update(Message::PrevCategory),
        KeyCode::Right | KeyCode::Char('l') => app.update(Message::NextCategory),
        KeyCode::Char(c @ '0'..='9') => {
            let category = c
                .to_digit(10)
                .and_then(|d| CategoryFilter::from_index(d as usize))?;
            app.update(Message::SelectCategory(category))
        }
        KeyCode::Char('y') => {
            app.copy_current();
            Vec::new()
        }
        KeyCode::Char('t') => {
            app.cycle_theme();
            Vec::new()
        }
        KeyCode::Enter if app.focus == ComponentId::Trips => app.activate_selected(),
        _ => return None,
    };
    Some(effects)
}

/// Mouse wheel scrolls the focused panel
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let code = match mouse.kind {
        MouseEventKind::ScrollUp => KeyCode::Up,
        MouseEventKind::ScrollDown => KeyCode::Down,
        _ => return,
    };
    app.dispatch_to_focused(KeyEvent::new(code, KeyModifiers::NONE));
}
