use std::sync::Arc;

use crate::config::Config;
use crate::repository::{CourseRepository, JobRepository};
use crate::upload::parser::CvParser;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only read-only collaborators; nothing is shared mutably across requests.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub cv_parser: Arc<dyn CvParser>,
    pub config: Config,
}
