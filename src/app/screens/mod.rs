//! TUI screen components
//!
//! Contains the per-screen renderers plus the chrome shared by all screens.

pub mod chrome;
pub mod info;
pub mod outcome;
pub mod question;
pub mod title;

pub use chrome::Drawer;
pub use question::QuestionScreen;
pub use title::{TitleAction, TitleScreen};
