use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Job;

#[allow(clippy::too_many_arguments)]
pub async fn create(
    pool: &PgPool,
    job_title: &str,
    job_description: &str,
    skills_required: &[String],
    location: &str,
    experience_required: &str,
    salary_range: &str,
    hr_username: &str,
) -> Result<Job, sqlx::Error> {
    sqlx::query_as::<_, Job>(
        "INSERT INTO jobs
             (job_title, job_description, skills_required, location,
              experience_required, salary_range, hr_username)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(job_title)
    .bind(job_description)
    .bind(skills_required)
    .bind(location)
    .bind(experience_required)
    .bind(salary_range)
    .bind(hr_username)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY date_posted DESC")
        .fetch_all(pool)
        .await
}

pub async fn list_by_hr(pool: &PgPool, hr_username: &str) -> Result<Vec<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>(
        "SELECT * FROM jobs WHERE hr_username = $1 ORDER BY date_posted DESC",
    )
    .bind(hr_username)
    .fetch_all(pool)
    .await
}
