use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Unchanged,
    Added,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffSegment {
    pub value: String,
    pub kind: DiffKind,
}

impl DiffSegment {
    pub fn new(value: impl Into<String>, kind: DiffKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}
