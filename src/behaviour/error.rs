//! Behaviour errors.

use thiserror::Error;

/// Collaborator contract violations met while processing a step.
///
/// Anything a learner can cause is a [`Decision`](super::Decision), never
/// an error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BehaviourError {
    #[error("Question graded a response with fraction {fraction}, expected a value in [0, 1]")]
    FractionOutOfRange { fraction: f64 },
}
