//! Quiz session state machine.
//!
//! A [`QuizSession`] owns the sampled quiz, the current position and the
//! recorded answers. Presentation layers drive it through
//! [`record_answer`](QuizSession::record_answer) and
//! [`advance`](QuizSession::advance) and read everything else through
//! accessors; the session never renders anything itself.
//!
//! ```text
//! Setup --start--> InProgress --advance (last)--> Finished --reset--> Setup
//! ```

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::error::SessionError;
use crate::model::{AnswerRecord, Question, QuestionBank, SampledQuiz};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No quiz has been started.
    Setup,
    /// Questions remain to be answered.
    InProgress,
    /// Every question has been answered and advanced past.
    Finished,
}

/// One user's attempt at a quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: SampledQuiz,
    current_index: usize,
    answers: BTreeMap<usize, AnswerRecord>,
    phase: Phase,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    /// A session in the setup phase.
    pub fn new() -> Self {
        Self {
            quiz: SampledQuiz::default(),
            current_index: 0,
            answers: BTreeMap::new(),
            phase: Phase::Setup,
        }
    }

    /// Begin a quiz, discarding any previous position and answers.
    pub fn start(&mut self, quiz: SampledQuiz) {
        tracing::debug!(questions = quiz.len(), "starting quiz");
        self.phase = if quiz.is_empty() {
            Phase::Finished
        } else {
            Phase::InProgress
        };
        self.quiz = quiz;
        self.current_index = 0;
        self.answers.clear();
    }

    /// Store the user's selection for a question. A later call for the same
    /// question replaces the earlier one until the session advances past it.
    pub fn record_answer(
        &mut self,
        question_index: usize,
        selected_key: impl Into<String>,
    ) -> Result<(), SessionError> {
        if self.phase != Phase::InProgress {
            return Err(SessionError::NotInProgress);
        }
        let question = self
            .quiz
            .get(question_index)
            .ok_or(SessionError::Index {
                index: question_index,
                total: self.quiz.len(),
            })?;
        if question_index < self.current_index {
            return Err(SessionError::Closed {
                index: question_index,
            });
        }

        let record = AnswerRecord {
            selected_key: selected_key.into(),
            correct_key: question.correct_key().to_string(),
        };
        tracing::debug!(
            question = question_index,
            selected = %record.selected_key,
            "answer recorded"
        );
        self.answers.insert(question_index, record);
        Ok(())
    }

    /// Move past the current question. Requires an answer for it; moving
    /// past the last question finishes the quiz.
    pub fn advance(&mut self) -> Result<Phase, SessionError> {
        if self.phase != Phase::InProgress {
            return Err(SessionError::NotInProgress);
        }
        if !self.answers.contains_key(&self.current_index) {
            return Err(SessionError::Unanswered);
        }

        self.current_index += 1;
        if self.current_index == self.quiz.len() {
            self.phase = Phase::Finished;
            tracing::debug!(score = self.score(), total = self.total(), "quiz finished");
        }
        Ok(self.phase)
    }

    /// Number of recorded answers matching the correct key. Unanswered
    /// questions count as incorrect.
    pub fn score(&self) -> usize {
        self.answers.values().filter(|a| a.is_correct()).count()
    }

    /// Return to the setup phase with no quiz, no answers and index 0.
    pub fn reset(&mut self) {
        self.quiz = SampledQuiz::default();
        self.current_index = 0;
        self.answers.clear();
        self.phase = Phase::Setup;
    }

    /// Reset and immediately start a freshly sampled quiz from `bank`.
    pub fn restart<R: Rng + ?Sized>(&mut self, bank: &QuestionBank, length: usize, rng: &mut R) {
        self.reset();
        self.start(bank.sample(length, rng));
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// The question awaiting an answer, if the quiz is in progress.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::InProgress => self.quiz.get(self.current_index),
            _ => None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of questions in the running quiz.
    pub fn total(&self) -> usize {
        self.quiz.len()
    }

    /// `true` while the current question is the final one.
    pub fn is_last_question(&self) -> bool {
        self.phase == Phase::InProgress && self.current_index + 1 == self.quiz.len()
    }

    pub fn answer(&self, question_index: usize) -> Option<&AnswerRecord> {
        self.answers.get(&question_index)
    }

    pub fn answers(&self) -> &BTreeMap<usize, AnswerRecord> {
        &self.answers
    }

    pub fn quiz(&self) -> &SampledQuiz {
        &self.quiz
    }
}
