use crate::{error::AppError, store};
use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;

/// Lists all registered users.
///
/// Projections never include the password hash. Ordered by id.
#[get("")]
pub async fn get_users(pool: web::Data<PgPool>) -> Result<impl Responder, AppError> {
    let users = store::users::list(&pool).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Retrieves a user by id.
///
/// ## Responses:
/// - `200 OK`: the user projection (no password hash).
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `404 Not Found`: no user with that id.
#[get("/{id}")]
pub async fn get_user(
    pool: web::Data<PgPool>,
    user_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let user = store::users::get_by_id(&pool, user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Retrieves the tasks owned by a user.
///
/// The user→tasks direction is a query over `tasks.owner_id`; user records
/// hold no task references. Answers 404 if the user itself does not exist.
#[get("/{id}/tasks")]
pub async fn get_user_tasks(
    pool: web::Data<PgPool>,
    user_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let user = store::users::get_by_id(&pool, user_id.into_inner()).await?;
    let tasks = store::tasks::list_by_owner(&pool, user.id).await?;
    Ok(HttpResponse::Ok().json(tasks))
}
