//! HTTP routes.

use crate::catalog::AdviceCatalog;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use kind_words_content::AdviceItem;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Path of the random-advice endpoint.
pub const ADVICE_PATH: &str = "/api/advice/";

/// Query parameters of `GET /api/advice/`.
#[derive(Debug, Default, Deserialize)]
pub struct AdviceParams {
    /// Category code; unknown codes are ignored.
    pub category: Option<String>,
}

/// Builds the service router.
pub fn router(catalog: Arc<AdviceCatalog>) -> Router {
    Router::new()
        .route(ADVICE_PATH, get(random_advice))
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}

/// Always answers 200; an empty match yields the filler item.
async fn random_advice(
    State(catalog): State<Arc<AdviceCatalog>>,
    Query(params): Query<AdviceParams>,
) -> Json<AdviceItem> {
    let item = catalog.pick(params.category.as_deref(), &mut rand::thread_rng());
    debug!(category = ?params.category, advice_id = ?item.id, "Served advice");
    Json(item)
}
