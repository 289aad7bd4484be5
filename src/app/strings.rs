//! Display strings
//!
//! Resolves the core's opaque title keys and holds the static page texts.

use crate::game::{Progress, TitleKey};

pub const APP_TITLE: &str = "Trivia";

pub const RULES_TEXT: &str = "\
Congratulations, you're about to play the trivia game!

Press Play to start. You will be shown a question with a list of possible \
answers. Mark the answer you think is right and press Enter to submit it.

Answer every question of the round correctly and you win. One wrong answer \
and it's game over, but you can always try again with a fresh shuffle of \
questions.

When you have answered every question of a round, share your score with \
the s key.";

pub const ABOUT_TEXT: &str = "\
A small terminal trivia game about Android development.

Questions are drawn in a new random order every time you return to the \
title screen. Bring your own questions with --questions <file> using a \
JSON or TOML file.";

/// Text for a screen title key at the given progress
pub fn resolve_title(key: TitleKey, progress: Progress) -> String {
    match key {
        TitleKey::AppName => APP_TITLE.to_string(),
        TitleKey::QuestionProgress => format!(
            "Trivia Question ({}/{})",
            progress.question_number(),
            progress.total_questions
        ),
        TitleKey::Congratulations => "Congratulations!".to_string(),
        TitleKey::GameOver => "Game Over".to_string(),
        TitleKey::Rules => "Rules".to_string(),
        TitleKey::About => "About".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_title_shows_progress() {
        let progress = Progress {
            current_index: 1,
            total_questions: 3,
        };
        assert_eq!(
            resolve_title(TitleKey::QuestionProgress, progress),
            "Trivia Question (2/3)"
        );
        assert_eq!(resolve_title(TitleKey::AppName, progress), "Trivia");
    }
}
