//! Axum route handler for CV uploads.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::{AppError, NO_FILE_PART, NO_SELECTED_FILE};
use crate::extraction::{self, DocumentFormat};
use crate::matching::{match_jobs, missing_skills, normalize_skills, recommend_courses, MatchResult};
use crate::models::candidate::ParsedCandidate;
use crate::models::course::Course;
use crate::state::AppState;
use crate::upload::parser::parse_cv;
use crate::upload::staging::stage_upload;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadCvResponse {
    pub parsed_cv: Value,
    pub matched_jobs: Vec<MatchResult>,
    pub suggested_courses: Vec<Course>,
}

struct UploadedFile {
    file_name: String,
    data: Bytes,
}

/// POST /upload-cv
///
/// Full pipeline: stage → extract text → structured parse → match jobs → suggest courses.
/// The staged file is removed on every exit path.
pub async fn handle_upload_cv(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadCvResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| {
        debug!("Upload is not a multipart body: {e}");
        AppError::BadRequest(NO_FILE_PART.to_string())
    })?;

    let upload = read_file_field(&mut multipart)
        .await?
        .ok_or_else(|| AppError::BadRequest(NO_FILE_PART.to_string()))?;
    if upload.file_name.is_empty() {
        return Err(AppError::BadRequest(NO_SELECTED_FILE.to_string()));
    }

    let staged = stage_upload(&state.config.upload_dir, &upload.data)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("Failed to stage upload")))?;

    let format = DocumentFormat::from_file_name(&upload.file_name)?;
    let path = staged.path().to_path_buf();
    let cv_text = tokio::task::spawn_blocking(move || extraction::extract(&path, format))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;
    info!(
        "Extracted {} chars from {:?} upload ({} bytes)",
        cv_text.len(),
        format,
        upload.data.len()
    );

    let parsed_cv = parse_cv(&cv_text, state.cv_parser.as_ref()).await?;
    let candidate = ParsedCandidate::from_value(&parsed_cv);
    debug!(
        "Parsed CV: {} skills, {} experience entries, {} qualifications",
        candidate.skills.len(),
        candidate.experience.len(),
        candidate.qualifications.len()
    );

    let jobs = state.jobs.list_jobs().await.unwrap_or_else(|e| {
        warn!("Database error loading jobs for matching: {e}");
        Vec::new()
    });

    let matched_jobs = match_jobs(&candidate.skills, &jobs);
    let missing = missing_skills(&matched_jobs, &normalize_skills(&candidate.skills));

    let suggested_courses = recommend_courses(&missing, state.courses.as_ref())
        .await
        .unwrap_or_else(|e| {
            warn!("Database error loading course suggestions: {e}");
            Vec::new()
        });

    info!(
        "Matched {} of {} jobs; {} missing skills, {} courses suggested",
        matched_jobs.len(),
        jobs.len(),
        missing.len(),
        suggested_courses.len()
    );

    if let Err(e) = staged.close() {
        warn!("Failed to delete temp file: {e}");
    }

    Ok(Json(UploadCvResponse {
        parsed_cv,
        matched_jobs,
        suggested_courses,
    }))
}

/// Returns the first `file` field carrying a filename, or `None` if the form has none.
/// A `file` part without a filename is a plain form value, not an upload.
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<UploadedFile>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Rejected(e.status(), e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(String::from) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Rejected(e.status(), e.body_text()))?;
        return Ok(Some(UploadedFile { file_name, data }));
    }
    Ok(None)
}
