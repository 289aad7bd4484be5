//! Trivia question data models
//!
//! Contains the validated `Question` type, the immutable `QuestionBank`
//! and the JSON/TOML file format used to load custom banks.

use crate::{Result, TriviaError};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A multiple-choice question with one correct option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    /// Build a question, checking that the answer is one of the options
    pub fn new<P, O, A>(prompt: P, options: O, correct_answer: A) -> Result<Self>
    where
        P: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
        A: Into<String>,
    {
        let prompt = prompt.into();
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let correct_answer = correct_answer.into();

        if prompt.trim().is_empty() {
            return Err(TriviaError::InvalidQuestion(
                "Prompt must not be empty".to_string(),
            ));
        }

        if options.is_empty() {
            return Err(TriviaError::InvalidQuestion(format!(
                "Question '{}' has no options",
                prompt
            )));
        }

        for (i, option) in options.iter().enumerate() {
            if options[..i].contains(option) {
                return Err(TriviaError::InvalidQuestion(format!(
                    "Question '{}' lists option '{}' more than once",
                    prompt, option
                )));
            }
        }

        if !options.contains(&correct_answer) {
            return Err(TriviaError::InvalidQuestion(format!(
                "Answer '{}' is not one of the options of '{}'",
                correct_answer, prompt
            )));
        }

        Ok(Self {
            prompt,
            options,
            correct_answer,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options in authored order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Exact text match against the correct answer
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

/// On-disk shape of a single question
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    prompt: String,
    options: Vec<String>,
    #[serde(alias = "correct_answer")]
    answer: String,
}

/// On-disk shape of a question bank file
#[derive(Debug, Deserialize)]
struct BankFile {
    questions: Vec<QuestionRecord>,
}

/// Immutable, non-empty set of questions shared by game sessions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    /// Create a bank from already-validated questions
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(TriviaError::QuestionBankError(
                "Question bank must contain at least one question".to_string(),
            ));
        }

        Ok(Self {
            questions: questions.into(),
        })
    }

    /// The bank shipped with the game
    pub fn builtin() -> Self {
        let questions = BUILTIN_QUESTIONS
            .iter()
            .map(|(prompt, options, answer)| Question {
                prompt: prompt.to_string(),
                options: options.iter().map(|o| o.to_string()).collect(),
                correct_answer: answer.to_string(),
            })
            .collect::<Vec<_>>();

        Self {
            questions: questions.into(),
        }
    }

    /// Load a bank from a `.json` or `.toml` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TriviaError::QuestionBankError(format!(
                "Failed to read question file {}: {}",
                path.display(),
                e
            ))
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let bank = match extension.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => Err(TriviaError::QuestionBankError(format!(
                "Unsupported question file format: {}",
                path.display()
            ))),
        }?;

        log::info!(
            "Loaded {} questions from {}",
            bank.len(),
            path.display()
        );
        Ok(bank)
    }

    /// Parse a bank from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: BankFile = serde_json::from_str(content)?;
        Self::from_records(file.questions)
    }

    /// Parse a bank from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: BankFile = toml::from_str(content).map_err(|e| {
            TriviaError::QuestionBankError(format!("TOML parsing error: {}", e))
        })?;
        Self::from_records(file.questions)
    }

    fn from_records(records: Vec<QuestionRecord>) -> Result<Self> {
        let questions = records
            .into_iter()
            .map(|r| Question::new(r.prompt, r.options, r.answer))
            .collect::<Result<Vec<_>>>()?;
        Self::new(questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_QUESTIONS: &[(&str, &[&str], &str)] = &[
    (
        "What is Android Jetpack?",
        &["Tools", "Documentation", "Libraries", "All of these"],
        "All of these",
    ),
    (
        "What is the base class for layouts?",
        &["ViewSet", "ViewGroup", "ViewCollection", "ViewRoot"],
        "ViewGroup",
    ),
    (
        "What layout do you use for complex screens?",
        &["GridLayout", "LinearLayout", "ConstraintLayout", "FrameLayout"],
        "ConstraintLayout",
    ),
    (
        "What do you use to push structured data into a layout?",
        &["Data binding", "Data pushing", "Set text", "An OnClick method"],
        "Data binding",
    ),
    (
        "What method do you use to inflate layouts in fragments?",
        &[
            "onActivityCreated()",
            "onCreateLayout()",
            "onInflateLayout()",
            "onCreateView()",
        ],
        "onCreateView()",
    ),
    (
        "What is the build system for Android?",
        &["Graddle", "Gradle", "Grodle", "Groyle"],
        "Gradle",
    ),
    (
        "Which class do you use to create a vector drawable?",
        &[
            "AndroidVectorDrawable",
            "DrawableVector",
            "VectorDrawable",
            "AndroidVector",
        ],
        "VectorDrawable",
    ),
    (
        "Which one of these is an Android navigation component?",
        &["NavCentral", "NavMaster", "NavSwitcher", "NavController"],
        "NavController",
    ),
    (
        "Which XML element lets you register an activity with the launcher?",
        &[
            "intent-filter",
            "app-registry",
            "launcher-registry",
            "app-launcher",
        ],
        "intent-filter",
    ),
    (
        "What do you use to mark a layout for data binding?",
        &["<binding>", "<layout>", "<data-binding>", "<dbinding>"],
        "<layout>",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("2 + 2?", ["3", "4", "5"], "4").unwrap();
        assert_eq!(q.prompt(), "2 + 2?");
        assert_eq!(q.options(), &["3", "4", "5"]);
        assert_eq!(q.correct_answer(), "4");
        assert!(q.is_correct("4"));
        assert!(!q.is_correct("3"));
        assert!(!q.is_correct(" 4"));
    }

    #[test]
    fn test_question_rejects_foreign_answer() {
        let err = Question::new("2 + 2?", ["3", "5"], "4").unwrap_err();
        assert!(matches!(err, TriviaError::InvalidQuestion(_)));
    }

    #[test]
    fn test_question_rejects_blank_prompt_and_empty_options() {
        assert!(Question::new("  ", ["a"], "a").is_err());
        assert!(Question::new("Empty?", Vec::<String>::new(), "a").is_err());
    }

    #[test]
    fn test_question_rejects_duplicate_options() {
        let err = Question::new("Dup?", ["a", "b", "a"], "a").unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_builtin_bank_is_valid() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 10);
        for q in bank.iter() {
            // Re-validate through the public constructor
            let rebuilt = Question::new(q.prompt(), q.options().to_vec(), q.correct_answer());
            assert!(rebuilt.is_ok(), "invalid builtin question: {}", q.prompt());
        }
    }

    #[test]
    fn test_empty_bank_rejected() {
        let err = QuestionBank::new(Vec::new()).unwrap_err();
        assert!(matches!(err, TriviaError::QuestionBankError(_)));
    }

    #[test]
    fn test_bank_from_json() {
        let json = r#"{
            "questions": [
                { "prompt": "Capital of France?", "options": ["Paris", "Lyon"], "answer": "Paris" },
                {
                    "prompt": "Largest planet?",
                    "options": ["Mars", "Jupiter"],
                    "correct_answer": "Jupiter"
                }
            ]
        }"#;
        let bank = QuestionBank::from_json_str(json).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.questions()[1].correct_answer(), "Jupiter");
    }

    #[test]
    fn test_bank_from_toml() {
        let toml_str = r#"
            [[questions]]
            prompt = "Rust's package manager?"
            options = ["npm", "cargo", "pip"]
            answer = "cargo"
        "#;
        let bank = QuestionBank::from_toml_str(toml_str).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions()[0].options().len(), 3);
    }

    #[test]
    fn test_bank_file_with_invalid_question() {
        let json = r#"{ "questions": [ { "prompt": "Q?", "options": ["a"], "answer": "b" } ] }"#;
        let err = QuestionBank::from_json_str(json).unwrap_err();
        assert!(matches!(err, TriviaError::InvalidQuestion(_)));
    }

    #[test]
    fn test_bank_malformed_json() {
        let err = QuestionBank::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, TriviaError::QuestionBankError(_)));
    }

    #[test]
    fn test_bank_clone_shares_questions() {
        let bank = QuestionBank::builtin();
        let copy = bank.clone();
        assert!(Arc::ptr_eq(&bank.questions, &copy.questions));
    }
}
