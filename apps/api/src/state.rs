use crate::config::Config;
use crate::export::layout::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Page geometry used for page estimates. Defaults to A4 with 0.5" margins.
    pub page_config: PageConfig,
}
