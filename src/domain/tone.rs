use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Formal,
    Informal,
    Serious,
    Humorous,
    Persuasive,
    Empathetic,
    Confident,
    Neutral,
}

impl Tone {
    pub const ALL: [Tone; 8] = [
        Tone::Formal,
        Tone::Informal,
        Tone::Serious,
        Tone::Humorous,
        Tone::Persuasive,
        Tone::Empathetic,
        Tone::Confident,
        Tone::Neutral,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Informal => "informal",
            Tone::Serious => "serious",
            Tone::Humorous => "humorous",
            Tone::Persuasive => "persuasive",
            Tone::Empathetic => "empathetic",
            Tone::Confident => "confident",
            Tone::Neutral => "neutral",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Informal => "Informal",
            Tone::Serious => "Serious",
            Tone::Humorous => "Humorous",
            Tone::Persuasive => "Persuasive",
            Tone::Empathetic => "Empathetic",
            Tone::Confident => "Confident",
            Tone::Neutral => "Neutral",
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid tone: {}", s))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
