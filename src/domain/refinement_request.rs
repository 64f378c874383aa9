use serde::{Deserialize, Serialize};

use super::RefinementParams;

/// Text to refine together with the selected parameters.
///
/// Blank text is representable here; it is rejected by whoever submits the
/// request, never by the refinement client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinementRequest {
    pub original_text: String,
    #[serde(default)]
    pub params: RefinementParams,
    #[serde(default)]
    pub suggestions: Option<String>,
}

impl RefinementRequest {
    pub fn new(original_text: impl Into<String>, params: RefinementParams) -> Self {
        Self {
            original_text: original_text.into(),
            params,
            suggestions: None,
        }
    }

    pub fn with_suggestions(mut self, suggestions: impl Into<String>) -> Self {
        self.suggestions = Some(suggestions.into());
        self
    }

    pub fn is_blank(&self) -> bool {
        self.original_text.trim().is_empty()
    }

    /// Suggestions with surrounding whitespace removed, `None` when blank.
    pub fn effective_suggestions(&self) -> Option<&str> {
        self.suggestions
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
