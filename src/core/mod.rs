//! Pure core of the attempt behaviour.
//!
//! - Attempt states via the `State` trait
//! - Guard predicates over steps and states
//! - Responses keyed by slot
//! - The append-only step history and its newest-first reader
//!
//! Nothing in this module has side effects.

mod guard;
mod history;
mod response;
mod state;

pub use guard::Guard;
pub use history::{AttemptHistory, BehaviourVars, Counter, HistoryReader, Step};
pub use response::{slot_key, Response, SLOT_PREFIX};
pub use state::{AttemptState, State};
