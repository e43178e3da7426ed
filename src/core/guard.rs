//! Guard predicates over committed steps and states.
//!
//! Guards are pure boolean functions. The history reader uses them to pick
//! the most recent step matching a condition, and the help policy uses
//! them to decide whether a hint may be revealed.

use std::marker::PhantomData;

/// Pure predicate over values of type `T`.
///
/// # Example
///
/// ```rust
/// use guessit::core::{AttemptState, Guard, State};
///
/// let still_open = Guard::new(|state: &AttemptState| !state.is_final());
///
/// assert!(still_open.check(&AttemptState::Todo));
/// assert!(!still_open.check(&AttemptState::Complete));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check whether `value` satisfies the guard.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}
