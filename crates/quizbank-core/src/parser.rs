//! JSON question bank parser.
//!
//! Parses a JSON array of `{ "question", "options", "answer" }` records into
//! a [`QuestionBank`], and reports non-fatal issues through
//! [`validate_question_bank`].

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use crate::error::LoadError;
use crate::model::{Question, QuestionBank};

/// Intermediate JSON structure for one question record.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    options: BTreeMap<String, String>,
    answer: String,
}

/// Parse a JSON payload into a validated, non-empty `QuestionBank`.
pub fn parse_question_bank(bytes: &[u8]) -> Result<QuestionBank, LoadError> {
    let raw: Vec<RawQuestion> =
        serde_json::from_slice(bytes).map_err(|e| LoadError::Malformed(e.to_string()))?;

    let questions = raw
        .into_iter()
        .enumerate()
        .map(|(index, q)| {
            Question::new(q.question, q.options, q.answer)
                .map_err(|reason| LoadError::InvalidQuestion { index, reason })
        })
        .collect::<Result<Vec<_>, _>>()?;

    QuestionBank::new(questions)
}

/// Parse a JSON string (useful for testing).
pub fn parse_question_bank_str(content: &str) -> Result<QuestionBank, LoadError> {
    parse_question_bank(content.as_bytes())
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Index of the offending question (if applicable).
    pub index: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Check a bank for issues that do not prevent a quiz from running.
pub fn validate_question_bank(bank: &QuestionBank, quiz_length: usize) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.len() < quiz_length {
        warnings.push(ValidationWarning {
            index: None,
            message: format!(
                "only {} questions available, quizzes will use all of them instead of {}",
                bank.len(),
                quiz_length
            ),
        });
    }

    let mut seen_texts = HashSet::new();
    for (index, question) in bank.questions().iter().enumerate() {
        let text = question.text().trim();

        if text.is_empty() {
            warnings.push(ValidationWarning {
                index: Some(index),
                message: "question text is empty".into(),
            });
        } else if !seen_texts.insert(text) {
            warnings.push(ValidationWarning {
                index: Some(index),
                message: format!("duplicate question: {text}"),
            });
        }

        if question.options().len() < 2 {
            warnings.push(ValidationWarning {
                index: Some(index),
                message: "fewer than two options".into(),
            });
        }

        for (key, option) in question.options() {
            if option.trim().is_empty() {
                warnings.push(ValidationWarning {
                    index: Some(index),
                    message: format!("option '{key}' has no text"),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_JSON: &str = r#"[
        {
            "question": "What is $2 + 2$?",
            "options": { "a": "3", "b": "4", "c": "5", "d": "22" },
            "answer": "b"
        },
        {
            "question": "Which planet is closest to the sun?",
            "options": { "a": "Mercury", "b": "Venus", "c": "Mars" },
            "answer": "a"
        }
    ]"#;

    #[test]
    fn parse_valid_bank() {
        let bank = parse_question_bank_str(VALID_JSON).unwrap();
        assert_eq!(bank.len(), 2);
        let first = &bank.questions()[0];
        assert_eq!(first.text(), "What is $2 + 2$?");
        assert_eq!(first.correct_key(), "b");
        assert_eq!(first.option_text("b"), Some("4"));
        assert_eq!(bank.questions()[1].options().len(), 3);
    }

    #[test]
    fn parse_preserves_order() {
        let bank = parse_question_bank_str(VALID_JSON).unwrap();
        assert!(bank.questions()[1].text().contains("planet"));
    }

    #[test]
    fn empty_array_is_rejected() {
        let err = parse_question_bank_str("[]").unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn non_array_is_malformed() {
        let err = parse_question_bank_str(r#"{"question": "x"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn garbage_is_malformed() {
        let err = parse_question_bank(b"<html>not json</html>").unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
        assert!(err.to_string().starts_with("invalid data format"));
    }

    #[test]
    fn missing_field_is_malformed() {
        let json = r#"[{ "question": "No answer", "options": { "a": "x" } }]"#;
        let err = parse_question_bank_str(json).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(ref m) if m.contains("answer")));
    }

    #[test]
    fn answer_outside_options_is_invalid() {
        let json = r#"[
            { "question": "ok", "options": { "a": "x", "b": "y" }, "answer": "a" },
            { "question": "bad", "options": { "a": "x", "b": "y" }, "answer": "z" }
        ]"#;
        let err = parse_question_bank_str(json).unwrap_err();
        match err {
            LoadError::InvalidQuestion { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("'z'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validate_clean_bank() {
        let bank = parse_question_bank_str(VALID_JSON).unwrap();
        assert!(validate_question_bank(&bank, 2).is_empty());
    }

    #[test]
    fn validate_reports_short_bank() {
        let bank = parse_question_bank_str(VALID_JSON).unwrap();
        let warnings = validate_question_bank(&bank, 10);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].index.is_none());
        assert!(warnings[0].message.contains("only 2 questions"));
    }

    #[test]
    fn validate_reports_question_issues() {
        let json = r#"[
            { "question": "Same", "options": { "a": "x", "b": "y" }, "answer": "a" },
            { "question": "Same", "options": { "a": "x", "b": " " }, "answer": "a" },
            { "question": "  ", "options": { "a": "only" }, "answer": "a" }
        ]"#;
        let bank = parse_question_bank_str(json).unwrap();
        let warnings = validate_question_bank(&bank, 3);

        assert!(warnings
            .iter()
            .any(|w| w.index == Some(1) && w.message.contains("duplicate")));
        assert!(warnings
            .iter()
            .any(|w| w.index == Some(1) && w.message.contains("option 'b'")));
        assert!(warnings
            .iter()
            .any(|w| w.index == Some(2) && w.message.contains("empty")));
        assert!(warnings
            .iter()
            .any(|w| w.index == Some(2) && w.message.contains("fewer than two")));
    }
}
