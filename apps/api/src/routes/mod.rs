pub mod catalog;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::upload::handlers;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(health::home_handler))
        .route("/health", get(health::health_handler))
        .route("/jobs", get(catalog::handle_list_jobs))
        .route("/courses", get(catalog::handle_list_courses))
        .route(
            "/upload-cv",
            post(handlers::handle_upload_cv).layer(upload_limit),
        )
        .with_state(state)
}
