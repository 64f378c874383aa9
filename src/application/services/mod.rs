mod export_service;
mod prompt_builder;
mod refinement_controller;
mod refinement_service;
mod refinement_session;
mod response_normalizer;

pub use export_service::{DEFAULT_FILENAME_STEM, ExportService, sanitize_filename_stem};
pub use prompt_builder::{SUGGESTIONS_DIRECTIVE, TEXT_HEADER, build_prompt};
pub use refinement_controller::{
    BLANK_INPUT_MESSAGE, GENERIC_FAILURE_MESSAGE, RefinementController,
};
pub use refinement_service::{RefinementError, RefinementService};
pub use refinement_session::{
    INTERRUPTED_MESSAGE, RefinementSession, SessionError, SubmitReceipt,
};
pub use response_normalizer::normalize_response;
