//! TUI application module
//!
//! Contains the screen flow state machine, effect execution, rendering and
//! terminal handling.

pub mod app;
pub mod effects;
pub mod render;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use render::{FrameRenderer, Renderer};
pub use state::{Action, ActionKind, Completion, Effect, GameState, Pending, Rules, Screen};
pub use tui::Tui;
