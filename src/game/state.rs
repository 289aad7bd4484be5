//! Game state for a single trivia session
//!
//! Holds the shuffled question order, the current position and the
//! player's pending selection. All operations are total: there is no
//! error path, only a boolean answer check.

use crate::models::{Question, QuestionBank};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

/// Change notifications delivered to subscribers after each mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameChange {
    /// Questions reshuffled and position reset
    Randomized,
    /// Player selected an answer for the active question
    AnswerSelected(String),
    /// The active question was consumed
    AnswerMatched { index: usize, correct: bool },
}

/// How far the player is through the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current_index: usize,
    pub total_questions: usize,
}

impl Progress {
    /// 1-based number of the question being shown, capped at the total
    pub fn question_number(&self) -> usize {
        (self.current_index + 1).min(self.total_questions)
    }
}

type Observer = Box<dyn FnMut(&GameChange)>;

/// Mutable state of one trivia session
pub struct GameState {
    questions: Vec<Question>,
    current_index: usize,
    selected_answer: Option<String>,
    total_questions: usize,
    correct_answers: usize,
    rng: StdRng,
    observers: Vec<Observer>,
}

impl GameState {
    /// Create a session over the bank in authored order
    pub fn new(bank: &QuestionBank) -> Self {
        Self {
            questions: bank.questions().to_vec(),
            current_index: 0,
            selected_answer: None,
            total_questions: bank.len(),
            correct_answers: 0,
            rng: StdRng::from_entropy(),
            observers: Vec::new(),
        }
    }

    /// Limit how many questions make up a session (clamped to the bank size)
    pub fn with_total_questions(mut self, total: usize) -> Self {
        self.total_questions = total.clamp(1, self.questions.len());
        self
    }

    /// Use a fixed seed so shuffles are reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Register a callback invoked after every state change
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&GameChange) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Shuffle the questions and start over from the first one
    pub fn randomize(&mut self) {
        self.questions.shuffle(&mut self.rng);
        self.current_index = 0;
        self.selected_answer = None;
        self.correct_answers = 0;
        log::debug!("Shuffled {} questions", self.questions.len());
        self.notify(GameChange::Randomized);
    }

    /// Record the player's choice for the active question
    pub fn select_answer(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::debug!("Selected answer '{}' for question {}", text, self.current_index);
        self.selected_answer = Some(text.clone());
        self.notify(GameChange::AnswerSelected(text));
    }

    /// Check the selection against the active question and move on.
    ///
    /// The question is consumed whatever the result; a missing selection
    /// counts as wrong. Once the session is complete there is nothing left
    /// to consume and this returns `false` without moving.
    pub fn match_answer(&mut self) -> bool {
        let Some(question) = self.current_question() else {
            log::warn!("Answer submitted after the last question");
            return false;
        };

        let correct = self
            .selected_answer
            .as_deref()
            .is_some_and(|answer| question.is_correct(answer));

        let index = self.current_index;
        self.current_index += 1;
        self.selected_answer = None;
        if correct {
            self.correct_answers += 1;
        }

        log::debug!("Question {} answered, correct: {}", index, correct);
        self.notify(GameChange::AnswerMatched { index, correct });
        correct
    }

    /// True once every question of the session has been consumed
    pub fn is_complete(&self) -> bool {
        self.current_index >= self.total_questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question being asked, or `None` when the session is complete
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_complete() {
            None
        } else {
            self.questions.get(self.current_index)
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            current_index: self.current_index,
            total_questions: self.total_questions,
        }
    }

    fn notify(&mut self, change: GameChange) {
        for observer in &mut self.observers {
            observer(&change);
        }
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("questions", &self.questions.len())
            .field("current_index", &self.current_index)
            .field("selected_answer", &self.selected_answer)
            .field("total_questions", &self.total_questions)
            .field("correct_answers", &self.correct_answers)
            .field("observers", &self.observers.len())
            .finish()
    }
}
