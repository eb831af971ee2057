use crate::error::AppError;
use crate::models::{Task, TaskInput};
use sqlx::PgPool;

/// Lists all tasks in id order.
pub async fn list(pool: &PgPool) -> Result<Vec<Task>, AppError> {
    let mut conn = pool.acquire().await?;

    let tasks = sqlx::query_as::<_, Task>(
        "SELECT id, title, description, status, start_date, end_date, owner_id
         FROM tasks ORDER BY id",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(tasks)
}

/// Lists the tasks owned by one user, in id order.
pub async fn list_by_owner(pool: &PgPool, owner_id: i32) -> Result<Vec<Task>, AppError> {
    let mut conn = pool.acquire().await?;

    let tasks = sqlx::query_as::<_, Task>(
        "SELECT id, title, description, status, start_date, end_date, owner_id
         FROM tasks WHERE owner_id = $1 ORDER BY id",
    )
    .bind(owner_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(tasks)
}

/// Inserts a new task.
///
/// `owner_id` must name an existing user: the foreign key enforces it, and a
/// violation comes back as `Referential` with no row created.
pub async fn create(pool: &PgPool, input: &TaskInput) -> Result<Task, AppError> {
    let mut conn = pool.acquire().await?;

    let task = sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (title, description, status, start_date, end_date, owner_id)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, title, description, status, start_date, end_date, owner_id",
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.status)
    .bind(input.start_date)
    .bind(input.end_date)
    .bind(input.owner_id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(task)
}

/// Fetches a task by id.
pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Task, AppError> {
    let mut conn = pool.acquire().await?;

    let task = sqlx::query_as::<_, Task>(
        "SELECT id, title, description, status, start_date, end_date, owner_id
         FROM tasks WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    task.ok_or_else(|| AppError::NotFound("Task not found".into()))
}

/// Overwrites every mutable field of a task with the supplied values.
///
/// Full replacement, not a merge: each column is named here and set from
/// the input. Re-owning a task to a nonexistent user trips the foreign key
/// and surfaces as `Referential`.
pub async fn update(pool: &PgPool, id: i32, input: &TaskInput) -> Result<Task, AppError> {
    let mut conn = pool.acquire().await?;

    let task = sqlx::query_as::<_, Task>(
        "UPDATE tasks
         SET title = $1, description = $2, status = $3,
             start_date = $4, end_date = $5, owner_id = $6
         WHERE id = $7
         RETURNING id, title, description, status, start_date, end_date, owner_id",
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.status)
    .bind(input.start_date)
    .bind(input.end_date)
    .bind(input.owner_id)
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    task.ok_or_else(|| AppError::NotFound("Task not found".into()))
}

/// Removes a task and returns the deleted record.
pub async fn delete(pool: &PgPool, id: i32) -> Result<Task, AppError> {
    let mut conn = pool.acquire().await?;

    let task = sqlx::query_as::<_, Task>(
        "DELETE FROM tasks WHERE id = $1
         RETURNING id, title, description, status, start_date, end_date, owner_id",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    task.ok_or_else(|| AppError::NotFound("Task not found".into()))
}
