//! Guessit: attempt behaviour for Guess It questions
//!
//! A Guess It question asks the learner to find a hidden sentence word by
//! word, or in wordle mode a hidden word letter by letter. This crate decides,
//! for every submission, how the attempt moves on: whether the try counts,
//! whether a help hint is unlocked, and when the attempt is complete or
//! closed by the try ceiling.
//!
//! # Core Concepts
//!
//! - **History**: the host's append-only log of committed steps, read
//!   newest first
//! - **Behaviour**: the state machine turning a pending step into a decision
//! - **Help policy**: when a hint may be revealed and what it shows
//!
//! # Example
//!
//! ```rust
//! use guessit::behaviour::{Decision, GuessItBehaviour, GuessItQuestion, PendingStep};
//! use guessit::config::QuestionConfig;
//! use guessit::core::{AttemptHistory, Response};
//!
//! let config = QuestionConfig::builder(["the", "quick", "fox"])
//!     .tries_before_help(1)
//!     .build()
//!     .unwrap();
//! let behaviour = GuessItBehaviour::new(GuessItQuestion::new(config));
//!
//! let guess = Response::from_fragments(["the", "slow", "cat"]);
//! let (_, history) = behaviour
//!     .apply(&AttemptHistory::new(), PendingStep::submit(guess.clone()))
//!     .unwrap();
//! let (decision, history) = behaviour
//!     .apply(&history, PendingStep::help(guess))
//!     .unwrap();
//!
//! assert_eq!(decision, Decision::Keep);
//! assert_eq!(
//!     behaviour.extra_help_if_requested(&history).to_string(),
//!     "the **quick**"
//! );
//! ```

mod macros;

pub mod behaviour;
pub mod config;
pub mod core;
pub mod help;

// Re-export commonly used types
pub use behaviour::{Decision, GuessItBehaviour, GuessItQuestion, PendingStep, Question};
pub use config::QuestionConfig;
pub use self::core::{AttemptHistory, AttemptState, Response, State, Step};
