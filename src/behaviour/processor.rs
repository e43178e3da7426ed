//! Submission processing for Guess It attempts.
//!
//! Every learner action (an answer or a help request) arrives as a
//! [`PendingStep`]. The behaviour reads the committed history, grades the
//! response through its [`Question`] and decides whether the step is kept,
//! kept as invalid, or discarded.

use super::error::BehaviourError;
use super::question::{Grade, GradeState, Question};
use super::step::{Decision, PendingStep};
use crate::config::{CompletionRule, HelpDecrement, QuestionConfig};
use crate::core::{AttemptHistory, AttemptState, Counter, HistoryReader, Response, State};
use crate::help::{Feedback, HelpPolicy, HelpText};
use std::collections::BTreeSet;

/// Form field submitting an answer.
pub const SUBMIT_FIELD: &str = "submit";
/// Form field requesting help.
pub const HELP_FIELD: &str = "helpme";
/// Form field flagging the wordle ceiling.
pub const MAX_TRIES_FIELD: &str = "maxtriesreached";

/// The attempt behaviour for one Guess It question.
///
/// # Example
///
/// ```rust
/// use guessit::behaviour::{Decision, GuessItBehaviour, GuessItQuestion, PendingStep};
/// use guessit::config::QuestionConfig;
/// use guessit::core::{AttemptHistory, AttemptState, Response};
///
/// let config = QuestionConfig::builder(["C", "A", "T"]).build().unwrap();
/// let behaviour = GuessItBehaviour::new(GuessItQuestion::new(config));
///
/// let history = AttemptHistory::new();
/// let pending = PendingStep::submit(Response::from_fragments(["C", "A", "T"]));
/// let (decision, history) = behaviour.apply(&history, pending).unwrap();
///
/// assert_eq!(decision, Decision::Keep);
/// assert_eq!(history.reader().current_state(), AttemptState::Complete);
/// ```
pub struct GuessItBehaviour<Q: Question> {
    question: Q,
}

impl<Q: Question> GuessItBehaviour<Q> {
    /// Create the behaviour for `question`.
    pub fn new(question: Q) -> Self {
        Self { question }
    }

    /// The question this behaviour grades against.
    pub fn question(&self) -> &Q {
        &self.question
    }

    fn config(&self) -> &QuestionConfig {
        self.question.config()
    }

    /// Process a learner action, dispatching help requests to
    /// [`process_help`](Self::process_help).
    pub fn process_action(
        &self,
        history: &AttemptHistory,
        pending: &mut PendingStep,
    ) -> Result<Decision, BehaviourError> {
        if pending.help_requested() {
            self.process_help(history, pending)
        } else {
            self.process_submit(history, pending)
        }
    }

    /// Process a pending step and commit it if kept.
    ///
    /// Returns the decision with the resulting history; a discarded step
    /// leaves the history as it was.
    pub fn apply(
        &self,
        history: &AttemptHistory,
        mut pending: PendingStep,
    ) -> Result<(Decision, AttemptHistory), BehaviourError> {
        let decision = self.process_action(history, &mut pending)?;
        let history = if decision.is_kept() {
            history.record(pending.into_step())
        } else {
            history.clone()
        };
        Ok((decision, history))
    }

    /// Grade a submission and stamp the resulting state and counters.
    pub fn process_submit(
        &self,
        history: &AttemptHistory,
        pending: &mut PendingStep,
    ) -> Result<Decision, BehaviourError> {
        let reader = history.reader();
        let help_requested = pending.help_requested();

        let prev_try = reader.graded_step();
        let prev_state = prev_try.map(|step| step.state);
        if prev_state == Some(AttemptState::GradedPartial) {
            tracing::debug!("attempt closed by the try ceiling, discarding");
            return Ok(Decision::Discard);
        }

        if !help_requested && !self.question.is_gradable_response(pending.response()) {
            return Ok(self.reject_ungradable(&reader, pending));
        }

        let empty = Response::empty();
        let prev_response = prev_try.map_or(&empty, |step| &step.response);
        let mut prev_count = i64::from(reader.last_counter_value(Counter::Try, 0));

        // A help request is graded as an empty answer.
        let response = if help_requested {
            prev_count -= self.help_refund(prev_count);
            &empty
        } else {
            pending.response()
        };

        if !help_requested && self.question.is_same_response(response, prev_response) {
            tracing::debug!(prev_count, "same response as the previous try, discarding");
            return Ok(Decision::Discard);
        }

        let grade = self.question.grade_response(response);
        if !(0.0..=1.0).contains(&grade.fraction) {
            tracing::warn!(fraction = grade.fraction, "question returned an out of range grade");
            return Err(BehaviourError::FractionOutOfRange {
                fraction: grade.fraction,
            });
        }
        let summary = self.question.summarise_response(response);

        let (state, max_tries_reached) = self.next_state(prev_state, prev_count, &grade);
        let try_count = u32::try_from((prev_count + 1).max(0)).unwrap_or(u32::MAX);

        pending.set_state(state);
        pending.set_summary(summary);
        let vars = pending.vars_mut();
        vars.try_count = Some(try_count);
        vars.raw_fraction = Some(grade.fraction);
        vars.max_tries_reached = max_tries_reached;

        tracing::debug!(
            try_count,
            fraction = grade.fraction,
            state = state.name(),
            help_requested,
            "kept graded try"
        );
        Ok(Decision::Keep)
    }

    /// Process a help request; a kept valid step is marked as granting help.
    pub fn process_help(
        &self,
        history: &AttemptHistory,
        pending: &mut PendingStep,
    ) -> Result<Decision, BehaviourError> {
        pending.request_help();
        let decision = self.process_submit(history, pending)?;
        if decision == Decision::Keep && pending.state() != Some(AttemptState::Invalid) {
            pending.vars_mut().help = true;
        }
        Ok(decision)
    }

    /// Form fields the host must accept for this attempt.
    pub fn expected_fields(&self, is_active: bool) -> BTreeSet<&'static str> {
        let mut fields = BTreeSet::new();
        if is_active {
            fields.insert(SUBMIT_FIELD);
            fields.insert(HELP_FIELD);
            if self.config().wordle_mode {
                fields.insert(MAX_TRIES_FIELD);
            }
        }
        fields
    }

    /// Tries-remaining message, hint, or nothing.
    pub fn extra_help_if_requested(&self, history: &AttemptHistory) -> HelpText {
        HelpPolicy::new(self.config()).extra_help(&history.reader())
    }

    /// Whether the help button should be shown.
    pub fn can_offer_help(&self, history: &AttemptHistory) -> bool {
        HelpPolicy::new(self.config()).can_offer_help(&history.reader())
    }

    /// Feedback for the latest graded try, if any.
    pub fn feedback(&self, history: &AttemptHistory) -> Option<Feedback> {
        HelpPolicy::new(self.config()).feedback(&history.reader())
    }

    fn reject_ungradable(&self, reader: &HistoryReader<'_>, pending: &mut PendingStep) -> Decision {
        pending.set_state(AttemptState::Invalid);
        let current = reader.current_state();
        if current.is_error() || current.is_final() {
            tracing::debug!(state = current.name(), "not gradable, discarding");
            Decision::Discard
        } else {
            tracing::warn!("response is not gradable");
            Decision::Invalid
        }
    }

    /// How many tries a help request gives back before the new count.
    fn help_refund(&self, prev_count: i64) -> i64 {
        let config = self.config();
        match config.help_decrement {
            HelpDecrement::Always => 1,
            HelpDecrement::ExceptAtThreshold
                if prev_count == i64::from(config.nb_tries_before_help) =>
            {
                0
            }
            HelpDecrement::ExceptAtThreshold => 1,
        }
    }

    fn is_complete(&self, grade: &Grade) -> bool {
        match self.config().completion_rule {
            CompletionRule::FullFraction => grade.fraction >= 1.0,
            CompletionRule::GradedRight => grade.state == GradeState::GradedRight,
        }
    }

    /// State for the new step and whether it hit the wordle ceiling.
    ///
    /// The ceiling compares the count before this try is added, so the
    /// try being recorded is the one that exhausts the budget.
    fn next_state(
        &self,
        prev_state: Option<AttemptState>,
        prev_count: i64,
        grade: &Grade,
    ) -> (AttemptState, bool) {
        let config = self.config();
        if prev_state == Some(AttemptState::Complete) || self.is_complete(grade) {
            return (AttemptState::Complete, false);
        }
        let ceiling = i64::from(config.nb_max_tries_wordle) - 2;
        if config.wordle_mode && prev_count > ceiling && grade.fraction < 1.0 {
            return (AttemptState::GradedPartial, true);
        }
        (AttemptState::Todo, false)
    }
}
