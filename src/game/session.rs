//! Trivia session facade
//!
//! Ties the game state to the router and exposes what a front end needs:
//! read accessors for rendering and one command per player action.

use super::router::{Router, RouterEvent, Screen, Transition};
use super::state::{GameChange, GameState, Progress};
use crate::config::GameConfig;
use crate::models::{Question, QuestionBank};

/// Result of the latest submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// One running game: state, navigation and the latest outcome
#[derive(Debug)]
pub struct TriviaSession {
    state: GameState,
    router: Router,
    last_outcome: Option<Outcome>,
    require_all_correct: bool,
}

impl TriviaSession {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            router: Router::new(),
            last_outcome: None,
            require_all_correct: false,
        }
    }

    /// Build a session from the game section of the configuration
    pub fn from_config(bank: &QuestionBank, config: &GameConfig) -> Self {
        let mut state = GameState::new(bank).with_total_questions(config.questions_per_game);
        if let Some(seed) = config.seed {
            state = state.with_seed(seed);
        }
        Self::new(state).with_require_all_correct(config.require_all_correct)
    }

    /// Only win after answering every question correctly
    pub fn with_require_all_correct(mut self, enabled: bool) -> Self {
        self.require_all_correct = enabled;
        self
    }

    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&GameChange) + 'static,
    {
        self.state.subscribe(observer);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_screen(&self) -> Screen {
        self.router.current()
    }

    pub fn history(&self) -> &[Screen] {
        self.router.history()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.state.current_question()
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.state.selected_answer()
    }

    pub fn progress(&self) -> Progress {
        self.state.progress()
    }

    pub fn can_go_back(&self) -> bool {
        self.router.can_go_back()
    }

    /// Share is offered once every question of the session is answered
    pub fn can_share(&self) -> bool {
        self.state.is_complete()
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Shuffle and start asking questions
    pub fn play(&mut self) -> bool {
        if self.current_screen() != Screen::Title {
            return false;
        }
        self.state.randomize();
        self.dispatch(RouterEvent::Play).is_some()
    }

    /// Record a choice; ignored unless a question is on screen
    pub fn select_answer(&mut self, text: impl Into<String>) {
        if self.current_screen() == Screen::Question {
            self.state.select_answer(text);
        }
    }

    /// Check the current selection and route to the outcome.
    ///
    /// Returns whether the answer was correct; `false` off the question screen.
    pub fn submit_answer(&mut self) -> bool {
        if self.current_screen() != Screen::Question {
            log::trace!("Submit ignored on {:?}", self.current_screen());
            return false;
        }

        let correct = self.state.match_answer();
        if self.require_all_correct && correct && !self.state.is_complete() {
            log::debug!("Correct, moving to question {}", self.state.current_index() + 1);
            return true;
        }

        self.last_outcome = Some(if correct { Outcome::Won } else { Outcome::Lost });
        self.dispatch(RouterEvent::Submitted { correct });
        correct
    }

    pub fn go_back(&mut self) -> bool {
        self.dispatch(RouterEvent::Back).is_some()
    }

    pub fn open_rules(&mut self) -> bool {
        self.dispatch(RouterEvent::OpenRules).is_some()
    }

    pub fn open_about(&mut self) -> bool {
        self.dispatch(RouterEvent::OpenAbout).is_some()
    }

    /// Leave the current screen for the title screen with a fresh shuffle
    pub fn return_to_title(&mut self) -> bool {
        let event = match self.current_screen() {
            Screen::Title => return false,
            Screen::Won => RouterEvent::Continue,
            Screen::Lost => RouterEvent::TryAgain,
            _ => RouterEvent::Home,
        };
        self.dispatch(event).is_some()
    }

    /// Plain-text score summary for an external share target
    pub fn share_text(&self) -> Option<String> {
        if !self.can_share() {
            return None;
        }
        Some(format!(
            "I scored {} out of {} on Trivia!",
            self.state.correct_answers(),
            self.state.total_questions()
        ))
    }

    fn dispatch(&mut self, event: RouterEvent) -> Option<Transition> {
        let transition = self.router.handle(event)?;
        if transition.to == Screen::Title {
            // Arriving at the title always starts a fresh session
            self.state.randomize();
            self.last_outcome = None;
        }
        Some(transition)
    }
}
