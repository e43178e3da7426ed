//! The question a behaviour drives.
//!
//! Grading, response comparison and summaries belong to the question. The
//! behaviour only consumes them through [`Question`], so any grader can be
//! plugged in. [`GuessItQuestion`] is the slot-by-slot grader Guess It
//! questions use.

use crate::config::QuestionConfig;
use crate::core::Response;
use serde::{Deserialize, Serialize};

/// The question's own classification of a graded response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeState {
    GradedRight,
    GradedPartial,
    GradedWrong,
}

/// Result of grading one response.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// Share of the answer found, in `[0, 1]`.
    pub fraction: f64,
    pub state: GradeState,
}

impl Grade {
    /// Grade for `fraction`, classified the usual way.
    pub fn from_fraction(fraction: f64) -> Self {
        let state = if fraction >= 1.0 {
            GradeState::GradedRight
        } else if fraction > 0.0 {
            GradeState::GradedPartial
        } else {
            GradeState::GradedWrong
        };
        Self { fraction, state }
    }
}

/// Collaborator contract between the behaviour and its question.
///
/// Implementations must be pure: the same inputs give the same answers.
pub trait Question {
    fn config(&self) -> &QuestionConfig;

    /// Whether `a` and `b` are the same answer.
    fn is_same_response(&self, a: &Response, b: &Response) -> bool;

    /// Whether `response` is complete enough to grade.
    fn is_gradable_response(&self, response: &Response) -> bool;

    fn grade_response(&self, response: &Response) -> Grade;

    /// One-line human readable rendering of `response`.
    fn summarise_response(&self, response: &Response) -> String;
}

/// Guess It question graded slot by slot against its configured answers.
#[derive(Clone, Debug)]
pub struct GuessItQuestion {
    config: QuestionConfig,
}

impl GuessItQuestion {
    /// Create a question grading against `config`.
    pub fn new(config: QuestionConfig) -> Self {
        Self { config }
    }

    fn fragments<'r>(&self, response: &'r Response) -> impl Iterator<Item = &'r str> {
        answer_fragments(response, self.config.answers.len())
    }
}

/// Trimmed fragment in every answer position, blank when missing.
fn answer_fragments(response: &Response, positions: usize) -> impl Iterator<Item = &str> {
    (1..=positions).map(move |position| response.slot(position).map(str::trim).unwrap_or_default())
}

impl Question for GuessItQuestion {
    fn config(&self) -> &QuestionConfig {
        &self.config
    }

    fn is_same_response(&self, a: &Response, b: &Response) -> bool {
        self.fragments(a).eq(self.fragments(b))
    }

    fn is_gradable_response(&self, response: &Response) -> bool {
        self.fragments(response).all(|fragment| !fragment.is_empty())
    }

    fn grade_response(&self, response: &Response) -> Grade {
        let total = self.config.answers.len();
        if total == 0 {
            return Grade::from_fraction(0.0);
        }
        let right = self
            .fragments(response)
            .zip(&self.config.answers)
            .filter(|(given, expected)| *given == expected.answer.trim())
            .count();
        Grade::from_fraction(right as f64 / total as f64)
    }

    fn summarise_response(&self, response: &Response) -> String {
        let separator = if self.config.wordle_mode { "" } else { " " };
        self.fragments(response)
            .map(|fragment| if fragment.is_empty() { "_" } else { fragment })
            .collect::<Vec<_>>()
            .join(separator)
    }
}
