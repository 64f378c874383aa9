use serde::{Deserialize, Serialize};

use super::{DesiredLength, Language, Purpose, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RefinementParams {
    pub language: Language,
    pub purpose: Purpose,
    pub tone: Tone,
    pub length: DesiredLength,
}

impl RefinementParams {
    pub fn new(language: Language, purpose: Purpose, tone: Tone, length: DesiredLength) -> Self {
        Self {
            language,
            purpose,
            tone,
            length,
        }
    }
}
