use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;

/// Extracts the authenticated subject (login handle) from request extensions.
///
/// Intended for routes behind [`AuthMiddleware`](crate::auth::AuthMiddleware),
/// which verifies the bearer token and inserts its [`Claims`]. If no claims
/// are present the extractor fails with an authentication error.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthenticatedUser(claims.sub.clone()))),
            None => {
                let err = AppError::Auth("Authentication required".to_string());
                ready(Err(err.into()))
            }
        }
    }
}
