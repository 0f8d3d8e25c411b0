use axum::{extract::State, response::Json as ResponseJson, routing::get, Json, Router};
use tracing::warn;

use crate::models::{AppState, HealthResponse};

const NETWORK_HINT: &str = "Is your Ollama container on the 'shared-ai' network?";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
}

/// Reports backend connectivity. Degradation is a payload status, never an
/// HTTP error.
async fn health_check(State(state): State<AppState>) -> ResponseJson<HealthResponse> {
    let configured_model = state.llm.default_model().to_string();
    let timestamp = chrono::Utc::now().to_rfc3339();

    let response = match state.llm.list_models().await {
        Ok(models) => HealthResponse {
            status: "healthy".to_string(),
            ollama: "connected".to_string(),
            available_models: Some(models),
            configured_model,
            hint: None,
            timestamp,
        },
        Err(e) => {
            warn!(error = %e, "Health check could not reach the backend");
            HealthResponse {
                status: "degraded".to_string(),
                ollama: format!("unreachable: {}", e),
                available_models: None,
                configured_model,
                hint: Some(NETWORK_HINT.to_string()),
                timestamp,
            }
        }
    };

    Json(response)
}
