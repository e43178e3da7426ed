//! Attempt states and the `State` trait they implement.
//!
//! The state of a question attempt is whatever the most recent committed
//! step says it is. States are plain values; nothing here has side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for attempt states.
///
/// All methods are pure. A state describes where a question attempt
/// stands after a step has been committed.
///
/// # Required Traits
///
/// - `Clone`: states are copied onto every committed step
/// - `PartialEq`: the processor compares the previous step's state
/// - `Debug`: states show up in logs
/// - `Serialize` + `Deserialize`: hosts persist steps
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the state for display and logging.
    fn name(&self) -> &str;

    /// Whether the attempt is finished once it reaches this state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this state records an answer that could not be graded.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// State of a Guess It attempt, stamped on each kept step.
    ///
    /// `Todo` is the open state a host initialises an attempt with.
    /// `Complete` and `GradedPartial` are terminal.
    #[derive(Copy, Eq, Hash, Default)]
    pub enum AttemptState {
        /// Open: the word has not been found yet.
        #[default]
        Todo,
        /// The last submission could not be graded.
        Invalid,
        /// Every slot was guessed correctly.
        Complete,
        /// The wordle try ceiling was hit without a full match.
        GradedPartial,
    }
    final: [Complete, GradedPartial]
    error: [Invalid]
}

impl AttemptState {
    /// Whether the learner may still interact with the attempt.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Todo | Self::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(AttemptState::Todo.name(), "Todo");
        assert_eq!(AttemptState::Invalid.name(), "Invalid");
        assert_eq!(AttemptState::Complete.name(), "Complete");
        assert_eq!(AttemptState::GradedPartial.name(), "GradedPartial");
    }

    #[test]
    fn terminal_states_are_final() {
        assert!(!AttemptState::Todo.is_final());
        assert!(!AttemptState::Invalid.is_final());
        assert!(AttemptState::Complete.is_final());
        assert!(AttemptState::GradedPartial.is_final());
    }

    #[test]
    fn only_invalid_is_an_error() {
        assert!(AttemptState::Invalid.is_error());
        assert!(!AttemptState::Todo.is_error());
        assert!(!AttemptState::Complete.is_error());
        assert!(!AttemptState::GradedPartial.is_error());
    }

    #[test]
    fn active_states_are_open_ones() {
        assert!(AttemptState::Todo.is_active());
        assert!(AttemptState::Invalid.is_active());
        assert!(!AttemptState::Complete.is_active());
        assert!(!AttemptState::GradedPartial.is_active());
    }

    #[test]
    fn default_state_is_todo() {
        assert_eq!(AttemptState::default(), AttemptState::Todo);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = AttemptState::GradedPartial;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: AttemptState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
