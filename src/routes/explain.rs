use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{ExplanationRequest, ExplanationResult, ItemId},
    routes::AppState,
    services::{scorer, ScoringError},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    pub user_history: Option<Vec<ItemId>>,
    pub recommended_product_id: Option<ItemId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResponse {
    pub explanation: String,
    pub was_generated: bool,
}

impl From<ExplanationResult> for ExplainResponse {
    fn from(result: ExplanationResult) -> Self {
        Self {
            explanation: result.text,
            was_generated: result.was_generated,
        }
    }
}

/// Handler for explanation endpoint
///
/// Ids are resolved before the explainer runs; once they resolve, the
/// response is always an explanation, generated or default.
pub async fn explain(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ExplainRequest>,
) -> AppResult<Json<ExplainResponse>> {
    let user_history = request
        .user_history
        .ok_or_else(|| AppError::InvalidInput("Missing user history".to_string()))?;
    let target_id = request.recommended_product_id.ok_or_else(|| {
        AppError::InvalidInput("Missing recommended product ID".to_string())
    })?;

    let catalog = state.catalog.as_ref();
    let history = scorer::resolve_history(catalog, &user_history)?;
    let target = catalog
        .get(target_id)
        .ok_or(ScoringError::UnknownItem(target_id))?;

    let explanation_request = ExplanationRequest {
        history: history.into_iter().cloned().collect(),
        target: target.clone(),
    };

    let result = state.explainer.explain(&explanation_request).await;

    tracing::info!(
        request_id = %request_id,
        target_id = %target_id,
        was_generated = result.was_generated,
        "Explanation served"
    );

    Ok(Json(result.into()))
}
