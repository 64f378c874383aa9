mod desired_length;
mod diff_segment;
mod document;
mod export_format;
mod language;
mod purpose;
mod refinement_params;
mod refinement_request;
mod tone;
mod ui_state;

pub use desired_length::DesiredLength;
pub use diff_segment::{DiffKind, DiffSegment};
pub use document::{ContentType, Document};
pub use export_format::ExportFormat;
pub use language::Language;
pub use purpose::Purpose;
pub use refinement_params::RefinementParams;
pub use refinement_request::RefinementRequest;
pub use tone::Tone;
pub use ui_state::{Phase, SubmissionId, UiState};
