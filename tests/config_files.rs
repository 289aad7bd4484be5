//! Integration tests for loading configuration and question files from disk

use std::fs;
use trivia::config::TriviaConfig;
use trivia::game::TriviaSession;
use trivia::models::QuestionBank;
use trivia::{error, TriviaError};

#[test]
fn test_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("trivia.toml");

    let mut config = TriviaConfig::default();
    config.game.questions_per_game = 5;
    config.game.seed = Some(123);
    config.log.level = "debug".to_string();
    config.save_to(&path).unwrap();

    let loaded = TriviaConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_config_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trivia.toml");
    fs::write(&path, "[game]\nquestions_per_game = 0\n").unwrap();

    let err = TriviaConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, TriviaError::ConfigError(_)));
    assert!(error::user_friendly_message(&err).contains("Check your settings"));
}

#[test]
fn test_malformed_config_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trivia.toml");
    fs::write(&path, "[game\nbroken").unwrap();
    assert!(TriviaConfig::load_from(&path).is_err());
}

#[test]
fn test_question_file_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank.json");
    fs::write(
        &path,
        r#"{ "questions": [
            { "prompt": "1 + 1?", "options": ["1", "2"], "answer": "2" },
            { "prompt": "2 + 2?", "options": ["4", "5"], "answer": "4" }
        ] }"#,
    )
    .unwrap();

    let bank = QuestionBank::load(&path).unwrap();
    assert_eq!(bank.len(), 2);

    let mut config = TriviaConfig::default();
    config.game.question_file = Some(path);
    assert!(config.validate().is_ok());

    let session = TriviaSession::from_config(&bank, &config.game);
    // Three requested, two available
    assert_eq!(session.progress().total_questions, 2);
}

#[test]
fn test_question_file_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank.TOML");
    fs::write(
        &path,
        r#"
            [[questions]]
            prompt = "Sky colour?"
            options = ["Blue", "Green"]
            answer = "Blue"
        "#,
    )
    .unwrap();

    let bank = QuestionBank::load(&path).unwrap();
    assert_eq!(bank.questions()[0].prompt(), "Sky colour?");
}

#[test]
fn test_question_file_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank.txt");
    fs::write(&path, "whatever").unwrap();

    let err = QuestionBank::load(&path).unwrap_err();
    assert!(matches!(err, TriviaError::QuestionBankError(_)));
}

#[test]
fn test_question_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = QuestionBank::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, TriviaError::QuestionBankError(_)));
}

#[test]
fn test_empty_question_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, r#"{ "questions": [] }"#).unwrap();

    let err = QuestionBank::load(&path).unwrap_err();
    assert!(err.to_string().contains("at least one question"));
}
