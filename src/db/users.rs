use sqlx::PgPool;

use crate::models::{Role, User};

pub async fn create(
    pool: &PgPool,
    username: &str,
    name: &str,
    email: &str,
    phone: &str,
    password_hash: &str,
    role: Role,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (username, name, email, phone, password_hash, role)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(username)
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(password_hash)
    .bind(role)
    .fetch_one(pool)
    .await
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await
}
