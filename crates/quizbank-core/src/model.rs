//! Core data model types for quizbank.
//!
//! A [`QuestionBank`] is the full set of questions loaded from a JSON
//! resource; a [`SampledQuiz`] is the bounded subset used for one attempt.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::sampler;

/// Number of questions in a quiz unless configured otherwise.
pub const DEFAULT_QUIZ_LENGTH: usize = 10;

/// A single multiple-choice question.
///
/// The correct key is always one of the option keys; construction through
/// [`Question::new`] enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    options: BTreeMap<String, String>,
    correct_key: String,
}

impl Question {
    /// Build a question, rejecting a correct key that is not among the options.
    pub fn new(
        text: impl Into<String>,
        options: BTreeMap<String, String>,
        correct_key: impl Into<String>,
    ) -> Result<Self, String> {
        let correct_key = correct_key.into();
        if options.is_empty() {
            return Err("question has no options".into());
        }
        if !options.contains_key(&correct_key) {
            return Err(format!("answer '{correct_key}' is not one of the options"));
        }
        Ok(Self {
            text: text.into(),
            options,
            correct_key,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Options keyed by choice-key.
    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    pub fn correct_key(&self) -> &str {
        &self.correct_key
    }

    /// Text of the option with the given key.
    pub fn option_text(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Options in a fresh uniformly random display order.
    pub fn shuffled_options<R: Rng + ?Sized>(&self, rng: &mut R) -> ShuffledOptions {
        sampler::shuffle_options(&self.options, rng)
    }
}

/// The full, validated set of questions loaded from one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Wrap a list of questions. An empty list is rejected.
    pub fn new(questions: Vec<Question>) -> Result<Self, LoadError> {
        if questions.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Draw a quiz of at most `length` distinct questions in random order.
    pub fn sample<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> SampledQuiz {
        sampler::sample(&self.questions, length, rng)
    }
}

/// The ordered questions for one quiz attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SampledQuiz {
    questions: Vec<Question>,
    requested: usize,
}

impl SampledQuiz {
    pub(crate) fn new(questions: Vec<Question>, requested: usize) -> Self {
        Self {
            questions,
            requested,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// How many questions were asked for when sampling.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// `true` when the bank held fewer questions than requested and every
    /// question was used.
    pub fn is_short(&self) -> bool {
        self.questions.len() < self.requested
    }
}

/// One answer option as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub key: String,
    pub text: String,
}

/// A question's options in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShuffledOptions {
    choices: Vec<Choice>,
}

impl ShuffledOptions {
    pub(crate) fn new(choices: Vec<Choice>) -> Self {
        Self { choices }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// The choice shown at a 1-based display position.
    pub fn at_position(&self, position: usize) -> Option<&Choice> {
        position
            .checked_sub(1)
            .and_then(|index| self.choices.get(index))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.choices.iter().any(|c| c.key == key)
    }

    /// Keys in display order.
    pub fn keys(&self) -> Vec<&str> {
        self.choices.iter().map(|c| c.key.as_str()).collect()
    }
}

/// The user's selection for one question alongside the expected key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub selected_key: String,
    pub correct_key: String,
}

impl AnswerRecord {
    pub fn is_correct(&self) -> bool {
        self.selected_key == self.correct_key
    }
}
