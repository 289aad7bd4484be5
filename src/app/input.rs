//! Keyboard input mapping
//!
//! Translates crossterm key events into the navigation actions the
//! screens understand.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Confirm selection or submit (Enter)
    Select,
    /// Mark the highlighted answer (Space)
    Mark,
    /// Mark answer by number (1-9)
    Choose(usize),
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Toggle the navigation drawer (m)
    Menu,
    /// Open the rules page (r)
    Rules,
    /// Open the about page (a)
    About,
    /// Share the score summary (s)
    Share,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Convert keyboard event to navigation action
pub fn key_to_action(key: KeyEvent) -> NavigationAction {
    match key.code {
        // Quit keys
        KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            NavigationAction::Quit
        }

        // Navigation keys
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => NavigationAction::Up,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => NavigationAction::Down,

        // Selection and confirmation
        KeyCode::Enter => NavigationAction::Select,
        KeyCode::Char(' ') => NavigationAction::Mark,
        KeyCode::Char(c @ '1'..='9') => NavigationAction::Choose(c as usize - '1' as usize),

        // Back/cancel
        KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

        // Screen shortcuts
        KeyCode::Char('m') => NavigationAction::Menu,
        KeyCode::Char('r') => NavigationAction::Rules,
        KeyCode::Char('a') => NavigationAction::About,
        KeyCode::Char('s') => NavigationAction::Share,

        _ => NavigationAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('q'))), NavigationAction::Quit);
        assert_eq!(key_to_action(key(KeyCode::Char('Q'))), NavigationAction::Quit);
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        // Plain 'c' is not bound
        assert_eq!(key_to_action(key(KeyCode::Char('c'))), NavigationAction::None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key_to_action(key(KeyCode::Up)), NavigationAction::Up);
        assert_eq!(key_to_action(key(KeyCode::Char('k'))), NavigationAction::Up);
        assert_eq!(key_to_action(key(KeyCode::Down)), NavigationAction::Down);
        assert_eq!(key_to_action(key(KeyCode::Char('j'))), NavigationAction::Down);
        assert_eq!(key_to_action(key(KeyCode::Tab)), NavigationAction::Down);
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(key_to_action(key(KeyCode::Enter)), NavigationAction::Select);
        assert_eq!(key_to_action(key(KeyCode::Char(' '))), NavigationAction::Mark);
        assert_eq!(key_to_action(key(KeyCode::Char('1'))), NavigationAction::Choose(0));
        assert_eq!(key_to_action(key(KeyCode::Char('4'))), NavigationAction::Choose(3));
        assert_eq!(key_to_action(key(KeyCode::Char('0'))), NavigationAction::None);
    }

    #[test]
    fn test_back_and_shortcuts() {
        assert_eq!(key_to_action(key(KeyCode::Esc)), NavigationAction::Back);
        assert_eq!(key_to_action(key(KeyCode::Backspace)), NavigationAction::Back);
        assert_eq!(key_to_action(key(KeyCode::Char('m'))), NavigationAction::Menu);
        assert_eq!(key_to_action(key(KeyCode::Char('r'))), NavigationAction::Rules);
        assert_eq!(key_to_action(key(KeyCode::Char('a'))), NavigationAction::About);
        assert_eq!(key_to_action(key(KeyCode::Char('s'))), NavigationAction::Share);
    }
}
