//! The Guess It attempt behaviour.
//!
//! This is the imperative edge of the crate: it consumes a pending step,
//! consults the question and the history, and tells the host what to do.
//!
//! # Key Concepts
//!
//! - **Question**: the grading collaborator, see [`Question`]
//! - **Pending step**: a learner action the behaviour stamps before commit
//! - **Decision**: keep, keep as invalid, or discard

mod error;
mod processor;
mod question;
mod step;

pub use error::BehaviourError;
pub use processor::{GuessItBehaviour, HELP_FIELD, MAX_TRIES_FIELD, SUBMIT_FIELD};
pub use question::{Grade, GradeState, GuessItQuestion, Question};
pub use step::{Decision, PendingStep};
