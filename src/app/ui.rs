//! Game UI controller
//!
//! Owns the trivia session and the screen components, turns navigation
//! actions into session commands and renders the active screen.

use crate::app::{
    input::NavigationAction,
    screens::{chrome, info, outcome, Drawer, QuestionScreen, TitleAction, TitleScreen},
    strings,
};
use crate::game::{Outcome, Screen, TriviaSession};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Screen state plus the session it renders
#[derive(Debug)]
pub struct GameUi {
    session: TriviaSession,
    title_screen: TitleScreen,
    question_screen: QuestionScreen,
    drawer: Drawer,
    share_popup: Option<String>,
    should_quit: bool,
}

impl GameUi {
    pub fn new(session: TriviaSession) -> Self {
        Self {
            session,
            title_screen: TitleScreen::new(),
            question_screen: QuestionScreen::new(),
            drawer: Drawer::new(),
            share_popup: None,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &TriviaSession {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer.is_open()
    }

    pub fn share_popup(&self) -> Option<&str> {
        self.share_popup.as_deref()
    }

    /// Apply one navigation action
    pub fn handle_action(&mut self, action: NavigationAction) {
        if action == NavigationAction::Quit {
            self.should_quit = true;
            return;
        }

        // Any key dismisses the share popup
        if self.share_popup.take().is_some() {
            return;
        }

        if self.drawer.is_open() {
            self.handle_drawer(action);
            return;
        }

        match action {
            NavigationAction::Rules => {
                self.session.open_rules();
                return;
            }
            NavigationAction::About => {
                self.session.open_about();
                return;
            }
            NavigationAction::Share => {
                self.share();
                return;
            }
            _ => {}
        }

        match self.session.current_screen() {
            Screen::Title => self.handle_title(action),
            Screen::Question => self.handle_question(action),
            Screen::Won | Screen::Lost => self.handle_outcome(action),
            Screen::Rules | Screen::About => {
                if action == NavigationAction::Back {
                    self.session.go_back();
                }
            }
        }

        // Drawer gestures are only available on the title screen
        if self.session.current_screen() != Screen::Title {
            self.drawer.close();
        }
    }

    fn handle_drawer(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.drawer.select_previous(),
            NavigationAction::Down => self.drawer.select_next(),
            NavigationAction::Select | NavigationAction::Mark => {
                match self.drawer.selected() {
                    Screen::Rules => self.session.open_rules(),
                    _ => self.session.open_about(),
                };
                self.drawer.close();
            }
            NavigationAction::Back | NavigationAction::Menu => self.drawer.close(),
            _ => {}
        }
    }

    fn handle_title(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.title_screen.select_previous(),
            NavigationAction::Down => self.title_screen.select_next(),
            NavigationAction::Menu => self.drawer.toggle(),
            NavigationAction::Select | NavigationAction::Mark => {
                match self.title_screen.selected_action() {
                    TitleAction::Play => {
                        self.session.play();
                    }
                    TitleAction::Rules => {
                        self.session.open_rules();
                    }
                    TitleAction::About => {
                        self.session.open_about();
                    }
                }
            }
            NavigationAction::Back => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_question(&mut self, action: NavigationAction) {
        let Some(question) = self.session.current_question() else {
            return;
        };
        let options = question.options().to_vec();
        self.question_screen.sync(self.session.progress().current_index);

        match action {
            NavigationAction::Up => self.question_screen.select_previous(options.len()),
            NavigationAction::Down => self.question_screen.select_next(options.len()),
            NavigationAction::Mark => {
                if let Some(option) = options.get(self.question_screen.cursor()) {
                    self.session.select_answer(option.clone());
                }
            }
            NavigationAction::Choose(index) => {
                if self.question_screen.jump_to(index, options.len()) {
                    self.session.select_answer(options[index].clone());
                }
            }
            NavigationAction::Select => {
                // Submit stays disabled until an answer is marked
                if self.session.selected_answer().is_some() {
                    self.session.submit_answer();
                }
            }
            NavigationAction::Back => {
                self.session.return_to_title();
            }
            _ => {}
        }
    }

    fn handle_outcome(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Select | NavigationAction::Mark | NavigationAction::Back => {
                self.session.return_to_title();
                self.title_screen.reset();
            }
            _ => {}
        }
    }

    fn share(&mut self) {
        if let Some(text) = self.session.share_text() {
            log::info!("Sharing score: {}", text);
            self.share_popup = Some(text);
        }
    }

    /// Render the whole frame for the current screen
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Top bar
                Constraint::Min(8),    // Screen body
                Constraint::Length(1), // Help
            ])
            .split(f.size());

        let screen = self.session.current_screen();
        let title = strings::resolve_title(screen.title_key(), self.session.progress());
        chrome::render_top_bar(
            f,
            chunks[0],
            &title,
            self.session.can_go_back(),
            self.session.can_share(),
        );

        match screen {
            Screen::Title => self.title_screen.render(f, chunks[1]),
            Screen::Question => {
                self.question_screen.sync(self.session.progress().current_index);
                if let Some(question) = self.session.current_question() {
                    self.question_screen.render(
                        f,
                        chunks[1],
                        question,
                        self.session.selected_answer(),
                    );
                }
            }
            Screen::Won | Screen::Lost => {
                let result = self.session.last_outcome().unwrap_or(if screen == Screen::Won {
                    Outcome::Won
                } else {
                    Outcome::Lost
                });
                let share = self.session.share_text();
                outcome::render(f, chunks[1], result, share.as_deref());
            }
            Screen::Rules => info::render(f, chunks[1], strings::RULES_TEXT),
            Screen::About => info::render(f, chunks[1], strings::ABOUT_TEXT),
        }

        chrome::render_help(f, chunks[2], chrome::help_text(screen, self.drawer.is_open()));

        self.drawer.render(f, chunks[1]);

        if let Some(text) = &self.share_popup {
            let area = f.size();
            chrome::render_share_popup(f, area, text);
        }
    }
}
