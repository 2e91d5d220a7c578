use std::sync::Arc;

use crate::config::Config;
use crate::store::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres or in-memory, chosen by `CONTENT_STORE`.
    pub store: Arc<dyn ContentStore>,
    pub config: Config,
}
