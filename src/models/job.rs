use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub job_title: String,
    pub job_description: String,
    pub skills_required: Vec<String>,
    pub location: String,
    pub experience_required: String,
    pub salary_range: String,
    pub hr_username: String,
    pub status: String,
    pub date_posted: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
