//! Question screen implementation
//!
//! Shows the active prompt with its options as radio buttons. Submitting
//! is only offered once an answer is marked.

use crate::models::Question;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Cursor over the options of the question on screen
#[derive(Debug)]
pub struct QuestionScreen {
    /// Question index the cursor belongs to
    question_index: Option<usize>,
    cursor: usize,
    list_state: ListState,
}

impl QuestionScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            question_index: None,
            cursor: 0,
            list_state,
        }
    }

    /// Reset the cursor when a different question is shown
    pub fn sync(&mut self, question_index: usize) {
        if self.question_index != Some(question_index) {
            self.question_index = Some(question_index);
            self.cursor = 0;
            self.list_state.select(Some(0));
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn select_previous(&mut self, option_count: usize) {
        if option_count == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 {
            option_count - 1
        } else {
            self.cursor - 1
        };
        self.list_state.select(Some(self.cursor));
    }

    pub fn select_next(&mut self, option_count: usize) {
        if option_count == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % option_count;
        self.list_state.select(Some(self.cursor));
    }

    /// Move the cursor straight to an option
    pub fn jump_to(&mut self, index: usize, option_count: usize) -> bool {
        if index >= option_count {
            return false;
        }
        self.cursor = index;
        self.list_state.select(Some(index));
        true
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        question: &Question,
        selected: Option<&str>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Prompt
                Constraint::Min(4),    // Options
                Constraint::Length(1), // Submit state
            ])
            .split(area);

        let prompt = Paragraph::new(question.prompt())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(prompt, chunks[0]);

        let items: Vec<ListItem> = question
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let marker = if selected == Some(option.as_str()) { "(*)" } else { "( )" };
                ListItem::new(format!("{} {}. {}", marker, i + 1, option))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let submit = if selected.is_some() {
            Line::from(vec![
                Span::styled("[Enter] Submit", Style::default().fg(Color::Green)),
            ])
        } else {
            Line::from(vec![
                Span::styled("Mark an answer to submit", Style::default().fg(Color::DarkGray)),
            ])
        };
        f.render_widget(Paragraph::new(submit), chunks[2]);
    }
}

impl Default for QuestionScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps() {
        let mut screen = QuestionScreen::new();
        screen.sync(0);
        screen.select_previous(4);
        assert_eq!(screen.cursor(), 3);
        screen.select_next(4);
        assert_eq!(screen.cursor(), 0);
    }

    #[test]
    fn test_sync_resets_cursor_on_new_question() {
        let mut screen = QuestionScreen::new();
        screen.sync(0);
        screen.select_next(4);
        screen.sync(0);
        assert_eq!(screen.cursor(), 1);
        screen.sync(1);
        assert_eq!(screen.cursor(), 0);
    }

    #[test]
    fn test_jump_to_bounds() {
        let mut screen = QuestionScreen::new();
        assert!(screen.jump_to(2, 4));
        assert_eq!(screen.cursor(), 2);
        assert!(!screen.jump_to(4, 4));
        assert_eq!(screen.cursor(), 2);
    }
}
