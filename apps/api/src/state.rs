use std::sync::Arc;

use crate::analysis::vocabulary::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup, read-only for the process lifetime. Shared
    /// across concurrent requests without locking.
    pub vocabulary: Arc<SkillVocabulary>,
}
