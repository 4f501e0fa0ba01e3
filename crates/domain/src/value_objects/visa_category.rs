//! Visa categories offered on the assessment form
//!
//! The list is advisory: leads store free-form strings and the repository
//! accepts any value. The form only offers these options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A visa category a prospect can express interest in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisaCategory {
    #[serde(rename = "O-1")]
    O1,
    #[serde(rename = "EB-1")]
    Eb1,
    #[serde(rename = "EB-2 NIW")]
    Eb2Niw,
    #[serde(rename = "I don't know")]
    Unsure,
}

impl VisaCategory {
    /// All categories, in the order the form presents them
    pub const ALL: [Self; 4] = [Self::O1, Self::Eb1, Self::Eb2Niw, Self::Unsure];

    /// The label stored on a lead
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::O1 => "O-1",
            Self::Eb1 => "EB-1",
            Self::Eb2Niw => "EB-2 NIW",
            Self::Unsure => "I don't know",
        }
    }

    /// Look up a category by its label (case-insensitive)
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for VisaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
