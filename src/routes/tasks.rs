//! Task CRUD handlers.
//!
//! Access policy: these routes sit behind the bearer-token middleware, so
//! every caller is authenticated, but operations are globally scoped — any
//! authenticated caller may read, modify, or delete any task. Owner-scoping
//! is a deliberate extension point, not an accident of omission.

use crate::{
    auth::extractors::AuthenticatedUser,
    error::AppError,
    models::TaskInput,
    store,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Retrieves the list of tasks.
///
/// Tasks are ordered by id.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Task` objects.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
#[get("")]
pub async fn get_tasks(pool: web::Data<PgPool>) -> Result<impl Responder, AppError> {
    let tasks = store::tasks::list(&pool).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task.
///
/// Expects a JSON payload conforming to `TaskInput`, including the
/// `owner_id` of an existing user.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created `Task` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If `owner_id` does not reference an existing user;
///   no task row is created.
/// - `422 Unprocessable Entity`: If input validation on `TaskInput` fails.
#[post("")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    task_data: web::Json<TaskInput>,
    caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = store::tasks::create(&pool, &task_data).await?;
    log::info!("task {} created by {}", task.id, caller.0);
    Ok(HttpResponse::Created().json(task))
}

/// Retrieves a specific task by its id.
///
/// ## Responses:
/// - `200 OK`: Returns the `Task` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If no task with the given id exists.
#[get("/{id}")]
pub async fn get_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let task = store::tasks::get_by_id(&pool, task_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Updates an existing task.
///
/// The payload is the full `TaskInput`: every mutable field is overwritten
/// with the supplied values. There is no partial update.
///
/// ## Responses:
/// - `200 OK`: Returns the updated `Task` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If no task with the given id exists, or the new
///   `owner_id` does not reference an existing user.
/// - `422 Unprocessable Entity`: If input validation on `TaskInput` fails.
#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<i32>,
    task_data: web::Json<TaskInput>,
    caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = store::tasks::update(&pool, task_id.into_inner(), &task_data).await?;
    log::info!("task {} updated by {}", task.id, caller.0);
    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task by its id and returns the deleted record.
///
/// ## Responses:
/// - `200 OK`: Returns the removed `Task` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If no task with the given id exists.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<i32>,
    caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = store::tasks::delete(&pool, task_id.into_inner()).await?;
    log::info!("task {} deleted by {}", task.id, caller.0);
    Ok(HttpResponse::Ok().json(task))
}
