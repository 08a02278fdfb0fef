use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

use crate::models::course::{Course, CourseRow};
use crate::models::job::{Job, JobRow};
use crate::repository::{CourseRepository, JobRepository, RepositoryError};

/// MySQL-backed implementation of both reference-table repositories.
#[derive(Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for MySqlRepository {
    async fn list_jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        let rows = sqlx::query_as::<_, JobRow>(
            "SELECT id, title, company, skills, description FROM jobs",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Loaded {} job rows", rows.len());
        Ok(rows.into_iter().map(Job::from).collect())
    }
}

#[async_trait]
impl CourseRepository for MySqlRepository {
    async fn list_courses(&self) -> Result<Vec<Course>, RepositoryError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            "SELECT id, name, provider, link, skill FROM courses",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn courses_for_skill(&self, skill: &str) -> Result<Vec<Course>, RepositoryError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            "SELECT id, name, provider, link, skill FROM courses WHERE LOWER(skill) = ?",
        )
        .bind(skill.to_lowercase())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }
}
