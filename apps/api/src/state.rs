use std::sync::Arc;

use crate::catalog::JobCatalog;
use crate::recommend::scorer::SimilarityScorer;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Built once at startup and immutable afterwards: requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Read-only posting source. Default: `StaticJobCatalog` seeded at startup.
    pub catalog: Arc<dyn JobCatalog>,
    /// Pluggable similarity scorer. Default: `TfidfScorer`.
    pub scorer: Arc<dyn SimilarityScorer>,
}
