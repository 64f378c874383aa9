use std::sync::Arc;

use crate::application::ports::{DiffRenderer, FileLoader, LlmClient};
use crate::application::services::{ExportService, RefinementService, RefinementSession};
use crate::presentation::config::Settings;

/// Collaborators shared by every handler. Each port has exactly one
/// implementation, bound at startup.
#[derive(Clone)]
pub struct AppState {
    pub refinement_service: Arc<RefinementService>,
    pub session: Arc<RefinementSession>,
    pub llm_client: Arc<dyn LlmClient>,
    pub file_loader: Arc<dyn FileLoader>,
    pub export_service: Arc<ExportService>,
    pub diff_renderer: Arc<dyn DiffRenderer>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        file_loader: Arc<dyn FileLoader>,
        export_service: ExportService,
        diff_renderer: Arc<dyn DiffRenderer>,
        settings: Settings,
    ) -> Self {
        let refinement_service = Arc::new(RefinementService::new(Arc::clone(&llm_client)));
        let session = Arc::new(RefinementSession::new(Arc::clone(&refinement_service)));

        Self {
            refinement_service,
            session,
            llm_client,
            file_loader,
            export_service: Arc::new(export_service),
            diff_renderer,
            settings,
        }
    }
}
