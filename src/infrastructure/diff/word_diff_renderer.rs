use similar::{ChangeTag, TextDiff};

use crate::application::ports::DiffRenderer;
use crate::domain::{DiffKind, DiffSegment};

/// Word diff that keeps whitespace as its own tokens, so concatenating the
/// unchanged and added segments reproduces the refined text exactly.
pub struct WordDiffRenderer;

impl DiffRenderer for WordDiffRenderer {
    fn diff(&self, original: &str, refined: &str) -> Vec<DiffSegment> {
        let diff = TextDiff::from_words(original, refined);
        let mut segments: Vec<DiffSegment> = Vec::new();

        for change in diff.iter_all_changes() {
            let kind = match change.tag() {
                ChangeTag::Equal => DiffKind::Unchanged,
                ChangeTag::Insert => DiffKind::Added,
                ChangeTag::Delete => DiffKind::Removed,
            };

            match segments.last_mut() {
                Some(last) if last.kind == kind => last.value.push_str(change.value()),
                _ => segments.push(DiffSegment::new(change.value(), kind)),
            }
        }

        segments
    }
}
