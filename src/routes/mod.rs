//! API Routes
//!
//! - `GET /health` - Backend connectivity probe (always 200)
//! - `POST /research` - Run the research and writing pipeline
//! - `GET /models` - Backend model inventory passthrough

pub mod health;
pub mod research;
pub mod models;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors_layer;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let cors = cors_layer(&state.config.server.cors_allowed_origins);

    Router::new()
        .merge(health::router(state.clone()))
        .merge(research::router(state.clone()))
        .merge(models::router(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
