use std::sync::Arc;

use crate::catalog::Catalog;
use crate::export::Exporter;
use crate::planner::store::PlanStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup.
    pub catalog: Arc<Catalog>,
    pub plans: PlanStore,
    /// Clipboard and file sink. Default: LocalExporter rooted at EXPORT_DIR.
    pub exporter: Arc<dyn Exporter>,
}
