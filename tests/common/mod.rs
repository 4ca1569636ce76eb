use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use hireline::config::Config;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-that-is-long-enough";

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn signup(
        &self,
        name: &str,
        username: &str,
        role: &str,
        password: &str,
    ) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/v1/auth/signup"))
            .json(&json!({
                "name": name,
                "username": username,
                "email": format!("{username}@test.com"),
                "phone": "555-0100",
                "role": role,
                "password": password,
            }))
            .send()
            .await
            .expect("signup request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn login(&self, username: &str, password: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/v1/auth/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("login request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Create a user and return their access token.
    pub async fn user_token(&self, username: &str, role: &str) -> String {
        let (body, status) = self.signup(username, username, role, "password123").await;
        assert_eq!(status, StatusCode::OK, "signup failed: {body}");
        let (body, status) = self.login(username, "password123").await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["access_token"].as_str().unwrap().to_string()
    }

    /// Create a job posting as the given HR user, return the job JSON.
    pub async fn post_job(&self, token: &str, title: &str) -> Value {
        let resp = self
            .client
            .post(self.url("/api/v1/jobs"))
            .bearer_auth(token)
            .json(&json!({
                "job_title": title,
                "job_description": "Build and maintain backend services",
                "skills_required": ["rust", "sql"],
                "location": "Remote",
                "experience_required": "2+ years",
                "salary_range": "80k-120k",
            }))
            .send()
            .await
            .expect("create job failed");
        assert_eq!(resp.status(), StatusCode::OK, "create job non-200");
        resp.json().await.unwrap()
    }

    /// Upload a resume file for a job, return (body, status).
    pub async fn upload_resume(
        &self,
        token: &str,
        job_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> (Value, StatusCode) {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
            .unwrap();
        let form = reqwest::multipart::Form::new()
            .text("job_id", job_id.to_string())
            .part("file", part);

        let resp = self
            .client
            .post(self.url("/api/v1/resumes"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .expect("upload resume failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Make an authenticated GET request expecting a JSON body.
    pub async fn get_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Make an authenticated GET request expecting a binary body.
    /// Returns (status, content-type, body bytes).
    pub async fn get_bytes(
        &self,
        path: &str,
        token: &str,
    ) -> (StatusCode, Option<String>, Vec<u8>) {
        let resp = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = resp.bytes().await.unwrap().to_vec();
        (status, content_type, bytes)
    }
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!(
        "hireline_test_{}",
        Uuid::now_v7().to_string().replace('-', "")
    );

    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        token_ttl_days: 7,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_upload_size: 1_048_576,
        log_level: "warn".to_string(),
    };

    let app = hireline::build_app(pool.clone(), config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
