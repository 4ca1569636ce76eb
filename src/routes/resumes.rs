use axum::extract::{Path, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::archive;
use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{Application, ApplicationSummary, Role};
use crate::state::SharedState;

#[derive(Serialize)]
pub struct ResumeUploadResponse {
    pub candidate_username: String,
    pub hr_username: String,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
}

struct ResumeUpload {
    job_id: Uuid,
    filename: String,
    content_type: String,
    data: Bytes,
}

/// Pull the `job_id` field and the `file` part out of a multipart body.
async fn parse_upload(headers: &HeaderMap, body: Bytes) -> Result<ResumeUpload, AppError> {
    let boundary = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| AppError::BadRequest("Expected multipart/form-data".to_string()))?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut job_id = None;
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Multipart error: {e}")))?
    {
        match field.name() {
            Some("job_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Field read error: {e}")))?;
                let parsed = Uuid::parse_str(text.trim())
                    .map_err(|_| AppError::BadRequest("Invalid job id".to_string()))?;
                job_id = Some(parsed);
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or("resume").to_string();
                let content_type = field
                    .content_type()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "application/pdf".to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("File read error: {e}")))?;
                file = Some((filename, content_type, data));
            }
            _ => {
                // Drain unrecognized fields so the stream stays consumable.
                let _ = field.bytes().await;
            }
        }
    }

    let job_id =
        job_id.ok_or_else(|| AppError::BadRequest("Missing job_id field".to_string()))?;
    let (filename, content_type, data) =
        file.ok_or_else(|| AppError::BadRequest("Missing file field".to_string()))?;

    Ok(ResumeUpload {
        job_id,
        filename,
        content_type,
        data,
    })
}

pub async fn upload(
    State(state): State<SharedState>,
    auth: AuthUser,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    auth.require_role(Role::Candidate)?;

    let upload = parse_upload(&headers, body).await?;

    if !upload.filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::BadRequest(
            "Only PDF files are allowed.".to_string(),
        ));
    }

    let job = db::jobs::find_by_id(&state.pool, upload.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    // Display filename is derived, not taken from the client.
    let filename = format!("{}_{}.pdf", auth.username(), Utc::now().date_naive());

    let application = db::applications::create(
        &state.pool,
        job.id,
        &job.job_title,
        auth.username(),
        &job.hr_username,
        &upload.data,
        &filename,
        &upload.content_type,
    )
    .await?;

    Ok(Json(ResumeUploadResponse {
        candidate_username: application.candidate_username,
        hr_username: application.hr_username,
        file_name: application.filename,
        uploaded_at: application.date_uploaded,
    }))
}

fn can_view(auth: &AuthUser, application: &Application) -> bool {
    auth.username() == application.candidate_username
        || auth.username() == application.hr_username
}

pub async fn download_one(
    State(state): State<SharedState>,
    auth: AuthUser,
    Path(application_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let application = db::applications::find_by_id(&state.pool, application_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    // Permitted to the owning candidate and to the posting's HR owner.
    if !can_view(&auth, &application) {
        return Err(AppError::Forbidden(
            "You do not have permission to view this resume.".to_string(),
        ));
    }

    if !application.has_payload() {
        return Err(AppError::NotFound("Resume not found".to_string()));
    }

    Ok((
        [
            (header::CONTENT_TYPE, application.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={application_id}_resume.pdf"),
            ),
        ],
        application.resume,
    )
        .into_response())
}

pub async fn download_bulk(
    State(state): State<SharedState>,
    auth: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<Response, AppError> {
    auth.require_role(Role::Hr)?;

    let job = db::jobs::find_by_id(&state.pool, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    if job.hr_username != auth.username() {
        return Err(AppError::Forbidden(
            "Only the posting's HR owner can download its resumes.".to_string(),
        ));
    }

    let applications = db::applications::list_by_job(&state.pool, job_id).await?;
    if applications.is_empty() {
        return Err(AppError::NotFound(
            "No applications found for this job".to_string(),
        ));
    }

    let entries = applications.into_iter().map(|app| {
        let name = format!("{}_{}_resume.pdf", app.candidate_username, app.id);
        (name, app.resume)
    });

    let zip_bytes = archive::build_zip(entries)?.ok_or_else(|| {
        AppError::NotFound("No resumes found for this job".to_string())
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=job_{job_id}_resumes.zip"),
            ),
        ],
        zip_bytes,
    )
        .into_response())
}

pub async fn list_applications(
    State(state): State<SharedState>,
    auth: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<Vec<ApplicationSummary>>, AppError> {
    auth.require_role(Role::Hr)?;

    let job = db::jobs::find_by_id(&state.pool, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    if job.hr_username != auth.username() {
        return Err(AppError::Forbidden(
            "Only the posting's HR owner can list its applications.".to_string(),
        ));
    }

    let summaries = db::applications::list_summaries_by_job(&state.pool, job_id).await?;
    if summaries.is_empty() {
        return Err(AppError::NotFound(
            "No applications found for this job".to_string(),
        ));
    }

    Ok(Json(summaries))
}
