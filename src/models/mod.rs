//! Data models module
//!
//! Contains the trivia question type and the immutable question bank
//! the game draws from.

pub mod question;

// Re-export commonly used types
pub use question::{Question, QuestionBank};
