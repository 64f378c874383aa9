use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target length of the rewrite relative to the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesiredLength {
    Concise,
    Detailed,
    #[default]
    OriginalLength,
    VeryShort,
    Medium,
}

impl DesiredLength {
    pub const ALL: [DesiredLength; 5] = [
        DesiredLength::Concise,
        DesiredLength::Detailed,
        DesiredLength::OriginalLength,
        DesiredLength::VeryShort,
        DesiredLength::Medium,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DesiredLength::Concise => "concise",
            DesiredLength::Detailed => "detailed",
            DesiredLength::OriginalLength => "original_length",
            DesiredLength::VeryShort => "very_short",
            DesiredLength::Medium => "medium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DesiredLength::Concise => "Concise (summarize)",
            DesiredLength::Detailed => "Detailed (expand)",
            DesiredLength::OriginalLength => "Close to the original length",
            DesiredLength::VeryShort => "Very short (e.g. a tweet)",
            DesiredLength::Medium => "Medium length (a few paragraphs)",
        }
    }
}

impl FromStr for DesiredLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DesiredLength::ALL
            .into_iter()
            .find(|l| l.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid length: {}", s))
    }
}

impl fmt::Display for DesiredLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
