use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// One candidate's resume submission against one job posting. `job_title`
/// and `hr_username` are denormalized from the posting at upload time and
/// never re-resolved. The resume payload is written once and never edited.
#[derive(Debug, Clone, FromRow)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub candidate_username: String,
    pub hr_username: String,
    pub resume: Vec<u8>,
    pub filename: String,
    pub content_type: String,
    pub file_size: i64,
    pub date_uploaded: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Whether a payload was actually stored. Zero-length uploads are kept
    /// as rows but excluded from retrieval and archives.
    pub fn has_payload(&self) -> bool {
        !self.resume.is_empty()
    }
}

/// Metadata-only view for listing a job's submissions; the payload stays
/// in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationSummary {
    pub application_id: Uuid,
    pub candidate_username: String,
    pub job_title: String,
    pub filename: String,
}
