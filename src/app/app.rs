//! Main application controller
//!
//! Manages the TUI, the game UI and the draw/input loop.

use crate::{
    app::{input::key_to_action, tui::Tui, ui::GameUi},
    config::TriviaConfig,
    game::{GameChange, TriviaSession},
    models::QuestionBank,
    Result, TriviaError,
};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Session and screen components
    ui: GameUi,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &TriviaConfig, bank: &QuestionBank) -> Result<Self> {
        let mut session = TriviaSession::from_config(bank, &config.game);
        session.subscribe(|change| match change {
            GameChange::AnswerMatched { index, correct } => {
                log::info!("Question {} answered, correct: {}", index + 1, correct)
            }
            other => log::trace!("Game state changed: {:?}", other),
        });

        let tui = Tui::new(config.ui.tick_rate())
            .map_err(|e| TriviaError::TuiError(format!("Failed to open terminal: {}", e)))?;

        Ok(Self {
            tui,
            ui: GameUi::new(session),
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Run the main application loop until the player quits
    pub fn run(&mut self) -> Result<()> {
        while !self.ui.should_quit() {
            let ui = &mut self.ui;
            self.tui.draw(|f| ui.render(f))?;

            if let Some(key) = self.tui.next_key()? {
                self.ui.handle_action(key_to_action(key));
            }
        }
        Ok(())
    }

    /// Leave raw mode and the alternate screen
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }
}
