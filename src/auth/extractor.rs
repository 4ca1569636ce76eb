use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;

use crate::auth::jwt;
use crate::db;
use crate::error::AppError;
use crate::models::{Role, User};
use crate::state::SharedState;

/// The authenticated requester, resolved from a bearer token. Extracting
/// this is the single gate in front of every protected operation: the
/// token's signature and expiry are checked, then its subject is resolved
/// against the users table.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    pub fn username(&self) -> &str {
        &self.user.username
    }

    pub fn require_role(&self, required: Role) -> Result<(), AppError> {
        if self.user.role == required {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!(
                "This operation requires the {required} role"
            )))
        }
    }
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    AppError::Unauthorized("Missing authentication token".to_string())
                })?;

        // Expired and malformed tokens both surface as a generic 401.
        let claims = jwt::decode_token(bearer.token(), &state.config.jwt_secret)
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

        let user = db::users::find_by_username(&state.pool, &claims.sub)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(AuthUser { user })
    }
}
