use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Application, ApplicationSummary};

#[allow(clippy::too_many_arguments)]
pub async fn create(
    pool: &PgPool,
    job_id: Uuid,
    job_title: &str,
    candidate_username: &str,
    hr_username: &str,
    resume: &[u8],
    filename: &str,
    content_type: &str,
) -> Result<Application, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        "INSERT INTO applications
             (job_id, job_title, candidate_username, hr_username,
              resume, filename, content_type, file_size)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
    )
    .bind(job_id)
    .bind(job_title)
    .bind(candidate_username)
    .bind(hr_username)
    .bind(resume)
    .bind(filename)
    .bind(content_type)
    .bind(resume.len() as i64)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Application>, sqlx::Error> {
    sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_by_job(pool: &PgPool, job_id: Uuid) -> Result<Vec<Application>, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        "SELECT * FROM applications WHERE job_id = $1 ORDER BY date_uploaded",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await
}

/// Metadata for every submission with a stored payload; the resume bytes
/// themselves are not fetched.
pub async fn list_summaries_by_job(
    pool: &PgPool,
    job_id: Uuid,
) -> Result<Vec<ApplicationSummary>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationSummary>(
        "SELECT id AS application_id, candidate_username, job_title, filename
         FROM applications
         WHERE job_id = $1 AND length(resume) > 0
         ORDER BY date_uploaded",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await
}
