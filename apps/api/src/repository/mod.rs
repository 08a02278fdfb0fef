//! Read-only access to the job and course reference tables.
//!
//! Handlers hold these as `Arc<dyn …>` so the backing store can be swapped
//! without touching endpoint code.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::course::Course;
use crate::models::job::Job;

pub mod mysql;

#[cfg(test)]
pub mod memory;

#[derive(Debug, Error)]
#[error("Repository error: {0}")]
pub struct RepositoryError(#[from] pub sqlx::Error);

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<Job>, RepositoryError>;
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, RepositoryError>;

    /// Courses whose stored skill equals `skill`, compared case-insensitively.
    async fn courses_for_skill(&self, skill: &str) -> Result<Vec<Course>, RepositoryError>;
}
