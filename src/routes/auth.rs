use axum::extract::State;
use axum::Json;
use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::auth::jwt::{encode_token, Claims};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::{Role, UserProfile};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub access_token: String,
    pub token_type: String,
}

pub async fn signup(
    State(state): State<SharedState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<UserProfile>, AppError> {
    if req.name.is_empty()
        || req.username.is_empty()
        || req.email.is_empty()
        || req.phone.is_empty()
        || req.password.is_empty()
    {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    // Fast path only; the unique index on username is the enforcement point.
    if db::users::find_by_username(&state.pool, &req.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("User already exists".to_string()));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let user = db::users::create(
        &state.pool,
        &req.username,
        &req.name,
        &req.email,
        &req.phone,
        &pw_hash,
        req.role,
    )
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("User already exists".to_string())
        }
        _ => AppError::Database(e),
    })?;

    Ok(Json(user.into()))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    // Unknown username and wrong password surface identically.
    let user = db::users::find_by_username(&state.pool, &req.username)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Incorrect username or password".to_string()))?;

    let valid = password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;
    if !valid {
        return Err(AppError::Unauthorized(
            "Incorrect username or password".to_string(),
        ));
    }

    let claims = Claims::new(
        &user.username,
        Duration::days(state.config.token_ttl_days),
    );
    let access_token =
        encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(TokenResponse {
        name: user.name,
        username: user.username,
        email: user.email,
        phone: user.phone,
        role: user.role,
        access_token,
        token_type: "bearer".to_string(),
    }))
}

pub async fn me(auth: AuthUser) -> Json<UserProfile> {
    Json(auth.user.into())
}
