use std::sync::Arc;

use crate::assets::AssetStore;
use crate::content::Portfolio;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<Portfolio>,
    /// The page, rendered once from `portfolio`.
    pub page_html: Arc<str>,
    pub assets: AssetStore,
}
