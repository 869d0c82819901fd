use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{models::CatalogItem, routes::AppState};

/// Handler listing the whole catalog
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<CatalogItem>> {
    Json(state.catalog.items().to_vec())
}
