use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language the input text is written in and the rewrite must stay in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    #[default]
    Polish,
    German,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Polish, Language::German];

    pub fn key(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Polish => "polish",
            Language::German => "german",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Polish => "Polish",
            Language::German => "German",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid language: {}", s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
