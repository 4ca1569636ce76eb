pub mod auth;
pub mod jobs;
pub mod resumes;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/signup", post(auth::signup))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/me", get(auth::me))
        // Jobs
        .route("/api/v1/jobs", get(jobs::list).post(jobs::create))
        .route("/api/v1/jobs/mine", get(jobs::list_mine))
        // Resumes
        .route("/api/v1/resumes", post(resumes::upload))
        .route("/api/v1/resumes/{application_id}", get(resumes::download_one))
        .route(
            "/api/v1/jobs/{job_id}/applications",
            get(resumes::list_applications),
        )
        .route("/api/v1/jobs/{job_id}/resumes", get(resumes::download_bulk))
}
