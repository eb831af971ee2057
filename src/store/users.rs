use crate::error::AppError;
use crate::models::{Credentials, User};
use sqlx::PgPool;

/// Field set for a new user row. The hash is produced by the credential
/// store before this struct is built; no plaintext reaches this module.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub login: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

/// Inserts a new user and returns the created record.
///
/// The insert itself is the uniqueness check: `users.login` and
/// `users.email` carry unique constraints, so a duplicate — including the
/// loser of a concurrent registration race — surfaces as a `Conflict`
/// without a check-then-insert window. `created_at` is assigned by the
/// database from the server clock.
pub async fn create(pool: &PgPool, user: NewUser<'_>) -> Result<User, AppError> {
    let mut conn = pool.acquire().await?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (login, email, password_hash, first_name, last_name)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, login, email, first_name, last_name, created_at",
    )
    .bind(user.login)
    .bind(user.email)
    .bind(user.password_hash)
    .bind(user.first_name)
    .bind(user.last_name)
    .fetch_one(&mut *conn)
    .await?;

    Ok(user)
}

/// Looks up the credential row for a login handle.
///
/// Returns `Ok(None)` for an unknown login; the caller decides how much of
/// that to disclose.
pub async fn find_credentials(pool: &PgPool, login: &str) -> Result<Option<Credentials>, AppError> {
    let mut conn = pool.acquire().await?;

    let credentials = sqlx::query_as::<_, Credentials>(
        "SELECT id, login, password_hash FROM users WHERE login = $1",
    )
    .bind(login)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(credentials)
}

/// Fetches a user by id. The projection never includes the password hash.
pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<User, AppError> {
    let mut conn = pool.acquire().await?;

    let user = sqlx::query_as::<_, User>(
        "SELECT id, login, email, first_name, last_name, created_at
         FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    user.ok_or_else(|| AppError::NotFound("User not found".into()))
}

/// Lists all users in id order, hash-free.
pub async fn list(pool: &PgPool) -> Result<Vec<User>, AppError> {
    let mut conn = pool.acquire().await?;

    let users = sqlx::query_as::<_, User>(
        "SELECT id, login, email, first_name, last_name, created_at
         FROM users ORDER BY id",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(users)
}
