//! In-memory repositories for handler tests.

use async_trait::async_trait;

use crate::models::course::Course;
use crate::models::job::Job;
use crate::repository::{CourseRepository, JobRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryRepository {
    pub jobs: Vec<Job>,
    pub courses: Vec<Course>,
    /// When set, every read fails the way an unreachable database would.
    pub fail: bool,
}

impl InMemoryRepository {
    fn check(&self) -> Result<(), RepositoryError> {
        if self.fail {
            return Err(RepositoryError(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl JobRepository for InMemoryRepository {
    async fn list_jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        self.check()?;
        Ok(self.jobs.clone())
    }
}

#[async_trait]
impl CourseRepository for InMemoryRepository {
    async fn list_courses(&self) -> Result<Vec<Course>, RepositoryError> {
        self.check()?;
        Ok(self.courses.clone())
    }

    async fn courses_for_skill(&self, skill: &str) -> Result<Vec<Course>, RepositoryError> {
        self.check()?;
        let skill = skill.to_lowercase();
        Ok(self
            .courses
            .iter()
            .filter(|c| c.skill.to_lowercase() == skill)
            .cloned()
            .collect())
    }
}
