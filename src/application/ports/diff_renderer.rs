use crate::domain::DiffSegment;

/// Word-level comparison between two texts.
pub trait DiffRenderer: Send + Sync {
    fn diff(&self, original: &str, refined: &str) -> Vec<DiffSegment>;
}
