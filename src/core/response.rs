//! Learner responses keyed by positional slot.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix of every positional slot key (`p1`, `p2`, ...).
pub const SLOT_PREFIX: &str = "p";

/// Key of the 1-based slot `position`.
pub fn slot_key(position: usize) -> String {
    format!("{SLOT_PREFIX}{position}")
}

/// Submitted fragments in the order the form presented them.
///
/// `PartialEq` is structural. Whether two submissions are the same answer
/// is for `Question::is_same_response` to decide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Response {
    slots: IndexMap<String, String>,
}

impl Response {
    /// Response with no slots at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a response from fragments, numbering slots from `p1`.
    ///
    /// ```rust
    /// use guessit::core::Response;
    ///
    /// let response = Response::from_fragments(["C", "A", "T"]);
    /// assert_eq!(response.slot(2), Some("A"));
    /// assert_eq!(response.get("p3"), Some("T"));
    /// ```
    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots = fragments
            .into_iter()
            .enumerate()
            .map(|(index, fragment)| (slot_key(index + 1), fragment.into()))
            .collect();
        Self { slots }
    }

    /// Set a slot, keeping its original position if it already exists.
    pub fn with(mut self, key: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.slots.insert(key.into(), fragment.into());
        self
    }

    /// Fragment stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    /// Fragment in the 1-based slot `position`.
    pub fn slot(&self, position: usize) -> Option<&str> {
        self.get(&slot_key(position))
    }

    /// Number of slots, blank ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots as `(key, fragment)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
