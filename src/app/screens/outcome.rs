//! Won / lost screens
//!
//! Displays the result of the last answer and the single action that
//! leads back to the title screen.

use crate::game::Outcome;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label of the button that returns to the title screen
pub fn action_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won => "Next Match",
        Outcome::Lost => "Try Again",
    }
}

pub fn render(f: &mut Frame, area: Rect, outcome: Outcome, share_text: Option<&str>) {
    let (headline, color, detail) = match outcome {
        Outcome::Won => ("You won!", Color::Green, "That was the right answer."),
        Outcome::Lost => ("Game over", Color::Red, "Not quite. Better luck next time."),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(detail),
        Line::from(""),
    ];

    if let Some(text) = share_text {
        lines.push(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("[Enter] {}", action_label(outcome)),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));

    f.render_widget(paragraph, area);
}
