//! Configuration errors.

use thiserror::Error;

/// A single problem found while validating a question configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("At least one answer fragment is required")]
    NoAnswers,

    #[error("Answer fragment {position} is empty")]
    EmptyAnswer { position: usize },

    #[error("Wordle mode needs a try ceiling of at least 1 (got {max_tries})")]
    WordleCeilingTooLow { max_tries: u32 },
}

/// Errors that can occur when loading or building a question configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse question configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every violation found, not just the first.
    #[error("Invalid question configuration: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lists_every_violation() {
        let error = ConfigError::Invalid(vec![
            ConfigViolation::NoAnswers,
            ConfigViolation::WordleCeilingTooLow { max_tries: 0 },
        ]);

        assert_eq!(
            error.to_string(),
            "Invalid question configuration: At least one answer fragment is required; \
             Wordle mode needs a try ceiling of at least 1 (got 0)"
        );
    }
}
