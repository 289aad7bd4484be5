//! Shared screen chrome
//!
//! Top bar, navigation drawer, help line and the share popup drawn around
//! and over every screen.

use crate::game::Screen;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the top bar: back arrow or menu button, title, share action
pub fn render_top_bar(f: &mut Frame, area: Rect, title: &str, can_go_back: bool, can_share: bool) {
    let nav = if can_go_back { "<- Back" } else { "= Menu" };

    let mut spans = vec![
        Span::styled(format!(" {} ", nav), Style::default().fg(Color::Black).bg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
    ];
    if can_share {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("[s] Share", Style::default().fg(Color::Cyan)));
    }

    let bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(bar, area);
}

/// Key hints for the current screen
pub fn help_text(screen: Screen, drawer_open: bool) -> &'static str {
    if drawer_open {
        return "Up/Down Navigate  Enter Open  Esc/m Close";
    }
    match screen {
        Screen::Title => "Up/Down Navigate  Enter Select  m Menu  Q Quit",
        Screen::Question => "Up/Down Move  Space/1-9 Mark  Enter Submit  Esc Title",
        Screen::Won | Screen::Lost => "Enter Continue  Esc Title  r Rules  a About",
        Screen::Rules | Screen::About => "Esc Back  Q Quit",
    }
}

pub fn render_help(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Span::styled(text.to_string(), Style::default().fg(Color::DarkGray)));
    f.render_widget(help, area);
}

/// Navigation drawer with links to the static pages
#[derive(Debug)]
pub struct Drawer {
    open: bool,
    list_state: ListState,
}

impl Drawer {
    pub const ITEMS: [Screen; 2] = [Screen::Rules, Screen::About];

    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            open: false,
            list_state,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.list_state.select(Some(0));
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn select_next(&mut self) {
        let next = (self.selected_index() + 1) % Self::ITEMS.len();
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        let current = self.selected_index();
        let prev = if current == 0 { Self::ITEMS.len() - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    pub fn selected(&self) -> Screen {
        Self::ITEMS[self.selected_index()]
    }

    fn selected_index(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.open {
            return;
        }

        let width = area.width.min(24);
        let panel = Rect { width, ..area };

        let items: Vec<ListItem> = Self::ITEMS
            .iter()
            .map(|screen| {
                ListItem::new(match screen {
                    Screen::Rules => "Rules",
                    _ => "About",
                })
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Trivia"))
            .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black))
            .highlight_symbol("> ");

        f.render_widget(Clear, panel);
        f.render_stateful_widget(list, panel, &mut self.list_state);
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new()
    }
}

/// Centered popup showing the share summary
pub fn render_share_popup(f: &mut Frame, area: Rect, text: &str) {
    let popup = centered_rect(60, 7, area);
    let paragraph = Paragraph::new(vec![
        Line::from(text.to_string()),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Style::default().fg(Color::DarkGray))),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Share"));

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// A rect of `percent_x` width and `height` rows centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawer_toggle_and_navigation() {
        let mut drawer = Drawer::new();
        assert!(!drawer.is_open());
        drawer.toggle();
        assert!(drawer.is_open());
        assert_eq!(drawer.selected(), Screen::Rules);

        drawer.select_next();
        assert_eq!(drawer.selected(), Screen::About);
        drawer.select_next();
        assert_eq!(drawer.selected(), Screen::Rules);
        drawer.select_previous();
        assert_eq!(drawer.selected(), Screen::About);

        drawer.toggle();
        assert!(!drawer.is_open());
        // Reopening starts from the first item
        drawer.open();
        assert_eq!(drawer.selected(), Screen::Rules);
    }

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 30);
        let popup = centered_rect(60, 7, area);
        assert_eq!(popup.height, 7);
        assert!(popup.x > 0 && popup.right() <= area.right());
    }
}
