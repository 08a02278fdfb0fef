use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `jobs` row as stored. `skills` is a comma-separated list.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: i64,
    pub title: Option<String>,
    pub company: Option<String>,
    pub skills: Option<String>,
    pub description: Option<String>,
}

/// A job posting. `skills` holds the raw comma-split parts; they are only
/// normalized when compared, never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub skills: Vec<String>,
    pub description: String,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Self {
            id: row.id,
            title: row.title.unwrap_or_default(),
            company: row.company.unwrap_or_default(),
            skills: split_skills(row.skills.as_deref().unwrap_or_default()),
            description: row.description.unwrap_or_default(),
        }
    }
}

fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(skills: Option<&str>) -> JobRow {
        JobRow {
            id: 7,
            title: Some("Backend Engineer".to_string()),
            company: Some("Acme".to_string()),
            skills: skills.map(String::from),
            description: None,
        }
    }

    #[test]
    fn test_skills_split_on_comma_without_rewriting() {
        let job = Job::from(row(Some("Python, Django ,sql")));
        assert_eq!(job.skills, vec!["Python", " Django ", "sql"]);
    }

    #[test]
    fn test_null_columns_become_empty_strings() {
        let job = Job::from(row(None));
        assert_eq!(job.description, "");
        assert_eq!(job.skills, vec![""]);
        assert_eq!(job.title, "Backend Engineer");
    }
}
