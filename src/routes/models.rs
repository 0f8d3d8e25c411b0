use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::error;

use crate::models::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/models", get(list_models))
        .with_state(state)
}

/// GET /models - the backend's inventory, untouched
async fn list_models(State(state): State<AppState>) -> Response {
    match state.llm.model_inventory().await {
        Ok(inventory) => (StatusCode::OK, Json(inventory)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list backend models");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "detail": e.to_string() })),
            )
                .into_response()
        }
    }
}
