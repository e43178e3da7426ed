//! Question configuration consumed by the behaviour.
//!
//! One configurable component covers every Guess It variant: the plain
//! help-after-N-tries question, the wordle ceiling, and the two historical
//! ways of counting a help request against the try budget.
//!
//! # Example
//!
//! ```rust
//! use guessit::config::QuestionConfig;
//!
//! let config = QuestionConfig::from_json(
//!     r#"{ "answers": ["C", "A", "T"], "nb_tries_before_help": 3 }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.answers.len(), 3);
//! assert!(!config.wordle_mode);
//! ```

mod builder;
mod error;

pub use builder::QuestionConfigBuilder;
pub use error::{ConfigError, ConfigViolation};

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Standard wordle budget.
pub const DEFAULT_MAX_TRIES_WORDLE: u32 = 6;

/// One expected fragment (a letter in wordle mode, a word otherwise).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AnswerRepr", into = "AnswerRepr")]
pub struct Answer {
    pub answer: String,
}

impl Answer {
    /// Expected fragment for one slot.
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

// Accept both `"C"` and `{ "answer": "C" }`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AnswerRepr {
    Plain(String),
    Record { answer: String },
}

impl From<AnswerRepr> for Answer {
    fn from(repr: AnswerRepr) -> Self {
        match repr {
            AnswerRepr::Plain(answer) | AnswerRepr::Record { answer } => Self { answer },
        }
    }
}

impl From<Answer> for AnswerRepr {
    fn from(answer: Answer) -> Self {
        AnswerRepr::Record {
            answer: answer.answer,
        }
    }
}

/// How a help request is counted against the try budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HelpDecrement {
    /// Help does not consume a try, except when requested exactly at the
    /// help threshold.
    #[default]
    ExceptAtThreshold,
    /// Help never consumes a try.
    Always,
}

/// What makes a graded try complete the attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionRule {
    /// The graded fraction is exactly 1.
    #[default]
    FullFraction,
    /// The question classified the response as right.
    GradedRight,
}

/// Read-only question settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionConfig {
    /// Expected fragments, matched against slots `p1`, `p2`, ...
    pub answers: Vec<Answer>,
    /// Tries before help may be requested; 0 disables the help button.
    #[serde(default)]
    pub nb_tries_before_help: u32,
    #[serde(default)]
    pub wordle_mode: bool,
    #[serde(default = "default_max_tries_wordle")]
    pub nb_max_tries_wordle: u32,
    #[serde(default)]
    pub help_decrement: HelpDecrement,
    #[serde(default)]
    pub completion_rule: CompletionRule,
}

fn default_max_tries_wordle() -> u32 {
    DEFAULT_MAX_TRIES_WORDLE
}

impl QuestionConfig {
    /// Start a builder for the given expected fragments.
    pub fn builder<I, S>(answers: I) -> QuestionConfigBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QuestionConfigBuilder::new(answers)
    }

    /// Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: QuestionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every rule, reporting all violations together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.check() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => {
                let violations: Vec<ConfigViolation> = violations.iter().cloned().collect();
                tracing::warn!(count = violations.len(), "rejected question configuration");
                Err(ConfigError::Invalid(violations))
            }
        }
    }

    fn check(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.answers.is_empty() {
            Validation::fail(ConfigViolation::NoAnswers)
        } else {
            Validation::success(())
        });

        for (index, answer) in self.answers.iter().enumerate() {
            if answer.answer.trim().is_empty() {
                checks.push(Validation::fail(ConfigViolation::EmptyAnswer {
                    position: index + 1,
                }));
            }
        }

        if self.wordle_mode && self.nb_max_tries_wordle == 0 {
            checks.push(Validation::fail(ConfigViolation::WordleCeilingTooLow {
                max_tries: self.nb_max_tries_wordle,
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
