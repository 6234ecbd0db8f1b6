use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::healthz))
        .route("/api/webhook", post(handlers::webhook))
        .route("/api/chart-data", post(handlers::chart_data))
        .route("/api/prompt-webhook", post(handlers::prompt_webhook))
        .with_state(state)
}
