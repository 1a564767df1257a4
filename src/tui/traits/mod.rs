//! Component trait system for the TUI
//!
//! Panels declare their own capabilities through traits instead of the
//! App knowing how to render, scroll or copy each one.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │        (orchestrator: routes keys, owns AppState)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌──────────┐   ┌──────────┐   ┌──────────┐
//!        │  Trips   │   │  Detail  │   │   Logs   │
//!        │  Panel   │   │  Panel   │   │  Panel   │
//!        └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! - [`Component`] - render + identity
//! - [`Scrollable`] / [`Selectable`] - scrolling and item selection
//! - [`Copyable`] - clipboard content
//! - [`Interactive`] - keyboard input

mod component;
mod copyable;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use copyable::Copyable;
pub use interactive::{Handled, Interactive};
pub use scrollable::{Scrollable, Selectable};
