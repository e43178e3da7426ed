//! Feedback shown under the question after a try.

use super::{HelpPolicy, HelpText};
use crate::core::{HistoryReader, State};
use std::fmt;

/// Feedback for the latest graded try.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// The latest try asked for help.
    ExtraHelp(HelpText),
    /// The wordle ceiling was reached; the answer is given away.
    WordNotFound { tries: u32, answer: String },
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtraHelp(text) => write!(f, "{text}"),
            Self::WordNotFound { tries, answer } => {
                write!(f, "Word not found in {tries} tries: {answer}")
            }
        }
    }
}

impl HelpPolicy<'_> {
    /// Feedback for the attempt, if any.
    ///
    /// Invalid attempts get none: the host already reports the answer as
    /// not gradable.
    pub fn feedback(&self, reader: &HistoryReader<'_>) -> Option<Feedback> {
        if reader.current_state().is_error() {
            return None;
        }
        let graded = reader.graded_step()?;

        // Checked first: a help request can exhaust the budget too.
        if graded.vars.max_tries_reached {
            Some(Feedback::WordNotFound {
                tries: graded.vars.try_count.unwrap_or_default(),
                answer: self.full_answer(),
            })
        } else if graded.vars.help {
            Some(Feedback::ExtraHelp(self.extra_help(reader)))
        } else {
            None
        }
    }

    fn full_answer(&self) -> String {
        let separator = if self.config.wordle_mode { "" } else { " " };
        self.config
            .answers
            .iter()
            .map(|answer| answer.answer.trim())
            .collect::<Vec<_>>()
            .join(separator)
    }
}
