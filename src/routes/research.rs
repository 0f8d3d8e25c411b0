use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;
use validator::Validate;

use crate::agents::{Depth, PipelineExecutor, PipelineResult};
use crate::llm::provider::GenerateOptions;
use crate::models::{AppState, ResearchErrorResponse, ResearchRequest, ResearchResponse};
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/research", post(run_research))
        .with_state(state)
}

/// POST /research - run the researcher and writer on a topic
async fn run_research(
    State(state): State<AppState>,
    body: Result<Json<ResearchRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(status = %rejection.status(), "Rejected research request body");
            return unprocessable(rejection.body_text());
        }
    };

    if let Err(errors) = request.validate() {
        return unprocessable(errors.to_string());
    }

    let run_id = Uuid::new_v4();
    info!(
        run_id = %run_id,
        topic = %request.topic,
        depth = %request.depth_label(),
        "Research request"
    );

    let start = Instant::now();
    let outcome = spawn_pipeline(&state, &request, run_id).await;
    let duration = start.elapsed().as_secs_f64();

    match outcome {
        Ok(result) => {
            let response = ResearchResponse {
                topic: request.topic,
                result: result.text,
                duration_seconds: round_to_hundredths(duration),
                model: result.model,
                agents_used: result.roles_used,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(run_id = %run_id, error = %e, "Crew execution failed");
            let response = ResearchErrorResponse {
                error: e.to_string(),
                hint: format!(
                    "Check that Ollama is running and the model '{}' is pulled.",
                    state.llm.default_model()
                ),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
    }
}

/// Runs the pipeline on its own task. The task is not tied to the request, so
/// it runs to completion even if the client goes away.
async fn spawn_pipeline(
    state: &AppState,
    request: &ResearchRequest,
    run_id: Uuid,
) -> AppResult<PipelineResult> {
    let llm = state.llm.clone();
    let options = GenerateOptions {
        max_tokens: None,
        temperature: state.config.llm.temperature,
    };
    let topic = request.topic.clone();
    let depth = Depth::from_label(request.depth_label());

    let handle = tokio::spawn(
        async move {
            let mut pipeline = PipelineExecutor::new(llm, options);
            pipeline.run(&topic, depth).await
        }
        .instrument(info_span!("pipeline", run_id = %run_id)),
    );

    handle
        .await
        .map_err(|e| AppError::Internal(format!("pipeline task failed: {}", e)))?
}

/// 422 with a `detail` message. Used for every body rejection.
fn unprocessable(detail: String) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(serde_json::json!({ "detail": detail })),
    )
        .into_response()
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
