use crate::config::Config;
use crate::error::AppError;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

/// Claims carried by a bearer token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's login handle.
    pub sub: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
    /// Issuance timestamp (seconds since epoch).
    pub iat: usize,
}

/// Signing and verification state for bearer tokens.
///
/// Built once from [`Config`] at startup and injected as app data, so the
/// secret and algorithm are configuration rather than ambient environment
/// reads. Tokens are stateless and self-contained: there is no revocation
/// store, and an unexpired, correctly-signed token is always accepted.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    ttl_minutes: i64,
}

impl TokenKeys {
    pub fn new(secret: &str, algorithm: Algorithm, ttl_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            ttl_minutes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_secret,
            config.jwt_algorithm,
            config.jwt_ttl_minutes,
        )
    }

    /// Issues a signed token for `subject`, expiring `ttl_minutes` from now.
    pub fn issue(&self, subject: &str) -> Result<String, AppError> {
        let now = chrono::Utc::now();
        let expiration = now
            .checked_add_signed(chrono::Duration::minutes(self.ttl_minutes))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            sub: subject.to_string(),
            exp: expiration,
            iat: now.timestamp() as usize,
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding)
            .map_err(|e| AppError::Storage(format!("failed to sign token: {}", e)))
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// An expired token fails with `AppError::TokenExpired`; a malformed
    /// token or bad signature fails with `AppError::TokenInvalid`. Claims
    /// are never exposed before the signature checks out.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &Validation::new(self.algorithm))
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::TokenInvalid(e.to_string()),
            })
    }
}
