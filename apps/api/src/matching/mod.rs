//! Skill matching: candidate skills vs job requirements, plus course gaps.
//!
//! Membership is binary: a job matches when it shares at least one
//! normalized skill with the candidate. There is no scoring or ranking.
//! Skill strings are compared as trimmed, lower-cased copies; the stored
//! values are never rewritten.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::course::Course;
use crate::models::job::Job;
use crate::repository::{CourseRepository, RepositoryError};

/// A matched job together with the skills it shares with the candidate.
/// Serializes as the job's own fields plus `matched_skills`.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub job: Job,
    pub matched_skills: HashSet<String>,
}

pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Normalizes into a set; duplicates collapse and blank entries are dropped.
pub fn normalize_skills<I, S>(skills: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills
        .into_iter()
        .map(|s| normalize_skill(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Returns the jobs sharing at least one skill with the candidate, in input order.
pub fn match_jobs(candidate_skills: &[String], jobs: &[Job]) -> Vec<MatchResult> {
    let candidate = normalize_skills(candidate_skills);

    jobs.iter()
        .filter_map(|job| {
            let matched_skills: HashSet<String> = normalize_skills(&job.skills)
                .intersection(&candidate)
                .cloned()
                .collect();
            (!matched_skills.is_empty()).then(|| MatchResult {
                job: job.clone(),
                matched_skills,
            })
        })
        .collect()
}

/// Union over all matches of the job's skills the candidate lacks.
/// This is the aggregate gap; it does not record which job needs which skill.
pub fn missing_skills(matches: &[MatchResult], candidate: &HashSet<String>) -> HashSet<String> {
    matches
        .iter()
        .flat_map(|m| normalize_skills(&m.job.skills))
        .filter(|skill| !candidate.contains(skill))
        .collect()
}

/// Looks up every course teaching one of the missing skills.
/// Skills without a course contribute nothing.
pub async fn recommend_courses(
    missing: &HashSet<String>,
    courses: &dyn CourseRepository,
) -> Result<Vec<Course>, RepositoryError> {
    let mut suggested = Vec::new();
    for skill in missing {
        suggested.extend(courses.courses_for_skill(skill).await?);
    }
    Ok(suggested)
}
