//! Pending steps and the decisions taken on them.

use crate::core::{AttemptState, BehaviourVars, Response, Step};
use chrono::{DateTime, Utc};

/// What the host should do with a pending step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Commit the step.
    Keep,
    /// Commit the step; it records an answer that could not be graded.
    Invalid,
    /// Drop the step, nothing changes.
    Discard,
}

impl Decision {
    /// Whether the host must commit the pending step.
    pub fn is_kept(&self) -> bool {
        matches!(self, Self::Keep | Self::Invalid)
    }
}

/// A learner action not yet committed to the history.
///
/// The host creates it from the submitted form; the behaviour sets its
/// resulting state, counters and summary.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingStep {
    response: Response,
    help_requested: bool,
    state: Option<AttemptState>,
    vars: BehaviourVars,
    summary: Option<String>,
    timestamp: DateTime<Utc>,
}

impl PendingStep {
    /// A normal answer submission.
    pub fn submit(response: Response) -> Self {
        Self {
            response,
            help_requested: false,
            state: None,
            vars: BehaviourVars::default(),
            summary: None,
            timestamp: Utc::now(),
        }
    }

    /// A help request, carrying whatever the form held at the time.
    pub fn help(response: Response) -> Self {
        Self {
            help_requested: true,
            ..Self::submit(response)
        }
    }

    /// The submitted form data.
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Whether this step asks for help.
    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    /// State set by the behaviour, `None` until processed.
    pub fn state(&self) -> Option<AttemptState> {
        self.state
    }

    /// Counters stamped by the behaviour.
    pub fn vars(&self) -> &BehaviourVars {
        &self.vars
    }

    /// Summary of the graded response, `None` until processed.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub(crate) fn request_help(&mut self) {
        self.help_requested = true;
    }

    pub(crate) fn set_state(&mut self, state: AttemptState) {
        self.state = Some(state);
    }

    pub(crate) fn vars_mut(&mut self) -> &mut BehaviourVars {
        &mut self.vars
    }

    pub(crate) fn set_summary(&mut self, summary: String) {
        self.summary = Some(summary);
    }

    /// Turn the pending step into a committed one.
    ///
    /// An unprocessed step commits as `Todo`.
    pub fn into_step(self) -> Step {
        Step {
            response: self.response,
            state: self.state.unwrap_or_default(),
            vars: self.vars,
            summary: self.summary,
            timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kept_decisions_are_committed() {
        assert!(Decision::Keep.is_kept());
        assert!(Decision::Invalid.is_kept());
        assert!(!Decision::Discard.is_kept());
    }

    #[test]
    fn help_step_keeps_submitted_response() {
        let pending = PendingStep::help(Response::from_fragments(["a", "b"]));

        assert!(pending.help_requested());
        assert_eq!(pending.response().slot(2), Some("b"));
        assert_eq!(pending.state(), None);
    }

    #[test]
    fn into_step_carries_processing_results() {
        let mut pending = PendingStep::submit(Response::from_fragments(["x"]));
        pending.set_state(AttemptState::Complete);
        pending.vars_mut().try_count = Some(4);
        pending.set_summary("x".to_string());

        let step = pending.into_step();

        assert_eq!(step.state, AttemptState::Complete);
        assert_eq!(step.vars.try_count, Some(4));
        assert_eq!(step.summary.as_deref(), Some("x"));
    }

    #[test]
    fn unprocessed_step_commits_as_todo() {
        let step = PendingStep::submit(Response::empty()).into_step();

        assert_eq!(step.state, AttemptState::Todo);
        assert!(!step.is_try());
    }
}
