//! Step history of a question attempt.
//!
//! The host owns an append-only sequence of committed steps. The core only
//! ever reads it, newest first, through [`HistoryReader`].

use super::guard::Guard;
use super::response::Response;
use super::state::AttemptState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Integer counters a step may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Counter {
    /// `_try`: cumulative number of tries.
    Try,
    /// `_help`: set to 1 on a step that granted help.
    Help,
    /// `_maxtriesreached`: set to 1 on the step that hit the wordle ceiling.
    MaxTriesReached,
}

/// Behaviour counters attached to one step.
///
/// Flags are `false` and counts `None` when the step did not set them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviourVars {
    #[serde(rename = "_try", default, skip_serializing_if = "Option::is_none")]
    pub try_count: Option<u32>,
    #[serde(rename = "_help", default, skip_serializing_if = "std::ops::Not::not")]
    pub help: bool,
    #[serde(
        rename = "_maxtriesreached",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub max_tries_reached: bool,
    #[serde(rename = "_rawfraction", default, skip_serializing_if = "Option::is_none")]
    pub raw_fraction: Option<f64>,
}

impl BehaviourVars {
    /// Value of `counter` if this step set it.
    pub fn counter(&self, counter: Counter) -> Option<u32> {
        match counter {
            Counter::Try => self.try_count,
            Counter::Help => self.help.then_some(1),
            Counter::MaxTriesReached => self.max_tries_reached.then_some(1),
        }
    }

    /// Whether this step set `counter`.
    pub fn has(&self, counter: Counter) -> bool {
        self.counter(counter).is_some()
    }
}

/// A committed step. Never mutated once recorded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// What the learner submitted with this action.
    pub response: Response,
    /// State of the attempt after this step.
    pub state: AttemptState,
    #[serde(default)]
    pub vars: BehaviourVars,
    /// Human readable rendering of the graded response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Step {
    /// Step with no counters, as hosts record the initial step.
    pub fn new(response: Response, state: AttemptState) -> Self {
        Self {
            response,
            state,
            vars: BehaviourVars::default(),
            summary: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach behaviour counters to the step.
    pub fn with_vars(mut self, vars: BehaviourVars) -> Self {
        self.vars = vars;
        self
    }

    /// Whether this step was a graded try.
    pub fn is_try(&self) -> bool {
        self.vars.has(Counter::Try)
    }
}

/// Ordered, append-only history of committed steps.
///
/// `record` returns a new history; the original is left untouched.
///
/// ```rust
/// use guessit::core::{AttemptHistory, AttemptState, Response, Step};
///
/// let history = AttemptHistory::new();
/// let next = history.record(Step::new(Response::empty(), AttemptState::Todo));
///
/// assert!(history.is_empty());
/// assert_eq!(next.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttemptHistory {
    steps: Vec<Step>,
}

impl AttemptHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step, returning the extended history.
    pub fn record(&self, step: Step) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// All steps, oldest first.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of committed steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Read-only view for querying the history newest first.
    pub fn reader(&self) -> HistoryReader<'_> {
        HistoryReader::new(self)
    }
}

impl FromIterator<Step> for AttemptHistory {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

/// Read-only, newest-first view over an [`AttemptHistory`].
#[derive(Clone, Copy, Debug)]
pub struct HistoryReader<'a> {
    history: &'a AttemptHistory,
}

impl<'a> HistoryReader<'a> {
    /// Reader over `history`.
    pub fn new(history: &'a AttemptHistory) -> Self {
        Self { history }
    }

    fn newest_first(&self) -> impl Iterator<Item = &'a Step> {
        self.history.steps.iter().rev()
    }

    /// Most recent value of `counter`, or `default` if no step set it.
    pub fn last_counter_value(&self, counter: Counter, default: u32) -> u32 {
        self.newest_first()
            .find_map(|step| step.vars.counter(counter))
            .unwrap_or(default)
    }

    /// Most recent step that set `counter`.
    pub fn last_step_with_counter(&self, counter: Counter) -> Option<&'a Step> {
        self.newest_first().find(|step| step.vars.has(counter))
    }

    /// Most recent step satisfying `guard`.
    pub fn most_recent_step_where(&self, guard: &Guard<Step>) -> Option<&'a Step> {
        self.newest_first().find(|step| guard.check(step))
    }

    /// Most recent graded try, if any.
    pub fn graded_step(&self) -> Option<&'a Step> {
        self.last_step_with_counter(Counter::Try)
    }

    /// State of the attempt as of the last committed step.
    pub fn current_state(&self) -> AttemptState {
        self.history
            .steps
            .last()
            .map(|step| step.state)
            .unwrap_or_default()
    }
}
