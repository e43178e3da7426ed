//! Builder for question configurations.

use super::{
    Answer, CompletionRule, ConfigError, HelpDecrement, QuestionConfig, DEFAULT_MAX_TRIES_WORDLE,
};

/// Fluent builder for [`QuestionConfig`].
///
/// ```rust
/// use guessit::config::QuestionConfig;
///
/// let config = QuestionConfig::builder(["W", "O", "R", "D"])
///     .tries_before_help(2)
///     .wordle(6)
///     .build()
///     .unwrap();
///
/// assert!(config.wordle_mode);
/// assert_eq!(config.nb_max_tries_wordle, 6);
/// ```
pub struct QuestionConfigBuilder {
    answers: Vec<Answer>,
    nb_tries_before_help: u32,
    wordle_mode: bool,
    nb_max_tries_wordle: u32,
    help_decrement: HelpDecrement,
    completion_rule: CompletionRule,
}

impl QuestionConfigBuilder {
    /// Start a builder for the given expected fragments.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Answer::new).collect(),
            nb_tries_before_help: 0,
            wordle_mode: false,
            nb_max_tries_wordle: DEFAULT_MAX_TRIES_WORDLE,
            help_decrement: HelpDecrement::default(),
            completion_rule: CompletionRule::default(),
        }
    }

    /// Tries the learner must make before help may be requested
    pub fn tries_before_help(mut self, n: u32) -> Self {
        self.nb_tries_before_help = n;
        self
    }

    /// Switch on wordle mode with the given try ceiling
    pub fn wordle(mut self, max_tries: u32) -> Self {
        self.wordle_mode = true;
        self.nb_max_tries_wordle = max_tries;
        self
    }

    /// How a help request adjusts the try count.
    pub fn help_decrement(mut self, rule: HelpDecrement) -> Self {
        self.help_decrement = rule;
        self
    }

    /// What counts as a completed attempt.
    pub fn completion_rule(mut self, rule: CompletionRule) -> Self {
        self.completion_rule = rule;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<QuestionConfig, ConfigError> {
        let config = QuestionConfig {
            answers: self.answers,
            nb_tries_before_help: self.nb_tries_before_help,
            wordle_mode: self.wordle_mode,
            nb_max_tries_wordle: self.nb_max_tries_wordle,
            help_decrement: self.help_decrement,
            completion_rule: self.completion_rule,
        };
        config.validate()?;
        Ok(config)
    }
}
