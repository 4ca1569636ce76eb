use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{Job, Role};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateJobRequest {
    pub job_title: String,
    pub job_description: String,
    pub skills_required: Vec<String>,
    pub location: String,
    pub experience_required: String,
    pub salary_range: String,
}

pub async fn create(
    State(state): State<SharedState>,
    auth: AuthUser,
    Json(req): Json<CreateJobRequest>,
) -> Result<Json<Job>, AppError> {
    auth.require_role(Role::Hr)?;

    if req.job_title.is_empty() || req.job_description.is_empty() {
        return Err(AppError::BadRequest(
            "Job title and description are required".to_string(),
        ));
    }

    let job = db::jobs::create(
        &state.pool,
        &req.job_title,
        &req.job_description,
        &req.skills_required,
        &req.location,
        &req.experience_required,
        &req.salary_range,
        auth.username(),
    )
    .await?;

    Ok(Json(job))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = db::jobs::list_all(&state.pool).await?;
    if jobs.is_empty() {
        return Err(AppError::NotFound("No jobs found".to_string()));
    }
    Ok(Json(jobs))
}

pub async fn list_mine(
    State(state): State<SharedState>,
    auth: AuthUser,
) -> Result<Json<Vec<Job>>, AppError> {
    auth.require_role(Role::Hr)?;

    let jobs = db::jobs::list_by_hr(&state.pool, auth.username()).await?;
    if jobs.is_empty() {
        return Err(AppError::NotFound(
            "No jobs found for this HR user".to_string(),
        ));
    }
    Ok(Json(jobs))
}
