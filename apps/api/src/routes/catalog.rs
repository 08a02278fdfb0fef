//! Read endpoints over the reference tables.
//!
//! Repository failures are logged and answered with an empty list, the same
//! policy the upload pipeline applies to its own reads.

use axum::{extract::State, Json};
use tracing::warn;

use crate::models::course::Course;
use crate::models::job::Job;
use crate::state::AppState;

/// GET /jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    let jobs = state.jobs.list_jobs().await.unwrap_or_else(|e| {
        warn!("Database error listing jobs: {e}");
        Vec::new()
    });
    Json(jobs)
}

/// GET /courses
pub async fn handle_list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    let courses = state.courses.list_courses().await.unwrap_or_else(|e| {
        warn!("Database error listing courses: {e}");
        Vec::new()
    });
    Json(courses)
}
