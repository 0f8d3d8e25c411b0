// Research Crew - two-agent research and writing pipeline over an Ollama backend

pub mod config;
pub mod models;
pub mod types;
pub mod agents;
pub mod llm;
pub mod routes;
pub mod middleware;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
