//! Title screen implementation
//!
//! Main menu with Play, Rules and About entries.

use crate::app::strings::APP_TITLE;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Entries of the title menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleAction {
    Play,
    Rules,
    About,
}

impl TitleAction {
    pub const ALL: [TitleAction; 3] = [TitleAction::Play, TitleAction::Rules, TitleAction::About];

    pub fn display_text(&self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Rules => "Rules",
            Self::About => "About",
        }
    }
}

/// Title screen component with the main menu
#[derive(Debug)]
pub struct TitleScreen {
    selected_index: usize,
    list_state: ListState,
}

impl TitleScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            selected_index: 0,
            list_state,
        }
    }

    pub fn selected_action(&self) -> TitleAction {
        TitleAction::ALL[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = TitleAction::ALL.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % TitleAction::ALL.len();
        self.list_state.select(Some(self.selected_index));
    }

    /// Put the cursor back on Play
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Banner
                Constraint::Min(5),    // Menu
            ])
            .split(area);

        let banner = Paragraph::new(vec![
            Line::from(""),
            Line::from(APP_TITLE.to_uppercase()),
            Line::from("How much do you know about Android?"),
        ])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
        f.render_widget(banner, chunks[0]);

        let items: Vec<ListItem> = TitleAction::ALL
            .iter()
            .map(|action| ListItem::new(action.display_text()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}

impl Default for TitleScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_navigation() {
        let mut screen = TitleScreen::new();
        assert_eq!(screen.selected_action(), TitleAction::Play);

        screen.select_next();
        assert_eq!(screen.selected_action(), TitleAction::Rules);
        screen.select_next();
        screen.select_next();
        assert_eq!(screen.selected_action(), TitleAction::Play);
    }

    #[test]
    fn test_menu_navigation_up_wraps() {
        let mut screen = TitleScreen::new();
        screen.select_previous();
        assert_eq!(screen.selected_action(), TitleAction::About);
        screen.reset();
        assert_eq!(screen.selected_action(), TitleAction::Play);
    }
}
