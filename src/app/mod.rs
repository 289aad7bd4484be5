//! TUI application module
//!
//! Contains the terminal user interface components, key mapping,
//! screen rendering and the application loop.

pub mod app;
pub mod input;
pub mod screens;
pub mod strings;
pub mod tui;
pub mod ui;

pub use app::App;
pub use input::{key_to_action, NavigationAction};
pub use tui::Tui;
pub use ui::GameUi;
