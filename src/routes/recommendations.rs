use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{ItemId, ScoredCandidate},
    routes::AppState,
    services::scorer,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub user_history: Vec<ItemId>,
}

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Vec<ScoredCandidate>>> {
    let candidates = scorer::score(state.catalog.as_ref(), &request.user_history).map_err(|e| {
        tracing::info!(request_id = %request_id, error = %e, "Rejected recommendation request");
        e
    })?;

    tracing::info!(
        request_id = %request_id,
        history_len = request.user_history.len(),
        recommendations = candidates.len(),
        "Recommendations computed"
    );

    Ok(Json(candidates))
}
