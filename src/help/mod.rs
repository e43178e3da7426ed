//! Hint eligibility.
//!
//! Help stays locked until the learner has made `nb_tries_before_help`
//! tries. Reaching the threshold only unlocks the help button: a hint is
//! revealed for the latest try only if that try was a help request.

mod feedback;
mod hint;

pub use feedback::Feedback;
pub use hint::{Hint, HintFragment};

use crate::config::QuestionConfig;
use crate::core::{Counter, Guard, HistoryReader, Response, Step};
use std::fmt;

/// Text offered to the learner in place of, or as, a hint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HelpText {
    /// Nothing to show.
    #[default]
    None,
    /// Help is still locked for this many tries.
    TriesRemaining(u32),
    Hint(Hint),
}

impl HelpText {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for HelpText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::TriesRemaining(1) => f.write_str("1 more try"),
            Self::TriesRemaining(n) => write!(f, "{n} more tries"),
            Self::Hint(hint) => write!(f, "{hint}"),
        }
    }
}

/// Hint rules for one question.
#[derive(Clone, Copy, Debug)]
pub struct HelpPolicy<'a> {
    config: &'a QuestionConfig,
}

impl<'a> HelpPolicy<'a> {
    /// Help policy for one question's settings.
    pub fn new(config: &'a QuestionConfig) -> Self {
        Self { config }
    }

    /// Tries-remaining message, hint, or nothing.
    pub fn extra_help(&self, reader: &HistoryReader<'_>) -> HelpText {
        let prev_tries = reader.last_counter_value(Counter::Try, 0);
        let threshold = self.config.nb_tries_before_help;

        if prev_tries < threshold {
            return HelpText::TriesRemaining(threshold - prev_tries);
        }

        let latest_try = Guard::new(|step: &Step| step.is_try());
        match reader.most_recent_step_where(&latest_try) {
            Some(step) if step.vars.help => {
                tracing::debug!(prev_tries, "revealing hint");
                HelpText::Hint(self.hint_for(&step.response))
            }
            _ => HelpText::None,
        }
    }

    /// Correct prefix of `response`, then the first wrong fragment.
    ///
    /// ```rust
    /// use guessit::config::QuestionConfig;
    /// use guessit::core::Response;
    /// use guessit::help::HelpPolicy;
    ///
    /// let config = QuestionConfig::builder(["the", "quick", "brown", "fox"])
    ///     .build()
    ///     .unwrap();
    /// let hint = HelpPolicy::new(&config)
    ///     .hint_for(&Response::from_fragments(["the", "slow", "brown", "cat"]));
    ///
    /// assert_eq!(hint.to_string(), "the **quick**");
    /// ```
    pub fn hint_for(&self, response: &Response) -> Hint {
        let mut hint = Hint::default();
        for (index, expected) in self.config.answers.iter().enumerate() {
            let expected = expected.answer.trim();
            let given = response.slot(index + 1).map(str::trim);
            if given == Some(expected) {
                hint.push(expected, false);
            } else {
                hint.push(expected, true);
                break;
            }
        }
        hint
    }

    /// Whether the help button should be shown.
    pub fn can_offer_help(&self, reader: &HistoryReader<'_>) -> bool {
        let prev_tries = reader.last_counter_value(Counter::Try, 0);
        let help_pending = reader.graded_step().is_some_and(|step| step.vars.help);

        self.config.nb_tries_before_help > 0
            && prev_tries != 0
            && !help_pending
            && reader.current_state().is_active()
    }
}
