pub mod health;
pub mod options;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis;
use crate::interview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/options", get(options::options_handler))
        // Resume Analysis tab
        .route(
            "/api/v1/resume/analyze",
            post(analysis::handlers::handle_analyze),
        )
        // Interview Practice tab
        .route(
            "/api/v1/interview/start",
            post(interview::handlers::handle_start),
        )
        .route(
            "/api/v1/interview/answer",
            post(interview::handlers::handle_answer),
        )
        .route(
            "/api/v1/interview/:session_id",
            get(interview::handlers::handle_status),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
