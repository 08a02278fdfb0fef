use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CourseRow {
    pub id: i64,
    pub name: Option<String>,
    pub provider: Option<String>,
    pub link: Option<String>,
    pub skill: Option<String>,
}

/// A course teaching exactly one skill tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub provider: String,
    pub link: String,
    pub skill: String,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Self {
            id: row.id,
            name: row.name.unwrap_or_default(),
            provider: row.provider.unwrap_or_default(),
            link: row.link.unwrap_or_default(),
            skill: row.skill.unwrap_or_default(),
        }
    }
}
