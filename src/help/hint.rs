//! Revealed hints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One answer fragment shown in a hint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintFragment {
    pub text: String,
    /// Set on the fragment the learner got wrong.
    pub highlighted: bool,
}

/// The correctly guessed prefix of the answer plus the first fragment the
/// learner got wrong.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    fragments: Vec<HintFragment>,
}

impl Hint {
    pub(crate) fn push(&mut self, text: &str, highlighted: bool) {
        self.fragments.push(HintFragment {
            text: text.to_string(),
            highlighted,
        });
    }

    /// Fragments in answer order.
    pub fn fragments(&self) -> &[HintFragment] {
        &self.fragments
    }

    /// The newly revealed fragment, if the learner had not found them all.
    pub fn revealed(&self) -> Option<&str> {
        self.fragments
            .iter()
            .find(|fragment| fragment.highlighted)
            .map(|fragment| fragment.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Fragments separated by spaces, the revealed one in `**bold**`.
impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, fragment) in self.fragments.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            if fragment.highlighted {
                write!(f, "**{}**", fragment.text)?;
            } else {
                f.write_str(&fragment.text)?;
            }
        }
        Ok(())
    }
}
