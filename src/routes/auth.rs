use crate::{
    auth::{hash_password, verify_password, LoginRequest, RegisterRequest, TokenKeys, TokenResponse},
    error::AppError,
    store,
};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns the created user (hash-free).
/// Duplicate login or email answers 409: the unique constraints make the
/// check atomic with the insert, so a concurrent duplicate registration
/// loses cleanly instead of producing a second row.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input before touching storage
    register_data.validate()?;

    let password_hash = hash_password(&register_data.password)?;

    let user = store::users::create(
        &pool,
        store::users::NewUser {
            login: &register_data.login,
            email: &register_data.email,
            password_hash: &password_hash,
            first_name: &register_data.first_name,
            last_name: &register_data.last_name,
        },
    )
    .await?;

    log::info!("registered user {} (id {})", user.login, user.id);

    Ok(HttpResponse::Created().json(user))
}

/// Login user
///
/// Authenticates a user and returns a bearer token whose subject is the
/// login handle. Unknown login and wrong password both answer the same
/// generic 401; the log line still distinguishes the cause.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    keys: web::Data<TokenKeys>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let credentials = store::users::find_credentials(&pool, &login_data.login).await?;

    let credentials = match credentials {
        Some(credentials) => credentials,
        None => {
            log::warn!("login failed: unknown login {}", login_data.login);
            return Err(AppError::Auth("Invalid credentials".into()));
        }
    };

    if !verify_password(&login_data.password, &credentials.password_hash) {
        log::warn!("login failed: bad password for {}", credentials.login);
        return Err(AppError::Auth("Invalid credentials".into()));
    }

    let token = keys.issue(&credentials.login)?;

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
}
