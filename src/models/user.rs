use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two account roles. Closed set: unknown values are rejected both at
/// JSON deserialization and at the storage boundary (Postgres enum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Hr,
    Candidate,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Hr => write!(f, "hr"),
            Role::Candidate => write!(f, "candidate"),
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public-safe projection of a user. The password hash never leaves the
/// `User` row, and `User` itself is never serialized into responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            name: user.name,
            username: user.username,
            email: user.email,
            phone: user.phone,
            role: user.role,
        }
    }
}
