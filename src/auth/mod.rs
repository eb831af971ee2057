pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenKeys};

lazy_static! {
    // Login handles: alphanumeric, underscores, hyphens
    static ref LOGIN_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired login handle for the new account.
    /// Must be between 3 and 32 characters, alphanumeric, and can include
    /// underscores or hyphens.
    #[validate(
        length(min = 3, max = 32),
        regex(
            path = "LOGIN_REGEX",
            message = "Login must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub login: String,
    /// Email address for the new account.
    #[validate(email)]
    pub email: String,
    /// Password for the new account. Must be at least 8 characters long.
    #[validate(length(min = 8, max = 100))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
}

/// Payload for a login request.
///
/// Only presence is validated here: a wrong-length password must still reach
/// the credential check and come back as an authentication failure, not a
/// validation one.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub login: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed bearer token.
    pub token: String,
    /// Always `"bearer"`.
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(token: String) -> Self {
        Self {
            token,
            token_type: "bearer".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn register_request(login: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            login: login.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            first_name: "Alice".to_string(),
            last_name: "Martin".to_string(),
        }
    }

    #[test]
    fn test_register_request_validation() {
        let valid = register_request("alice_01", "alice@example.com", "Password123!");
        assert!(valid.validate().is_ok());

        let bad_login = register_request("alice martin!", "alice@example.com", "Password123!");
        assert!(bad_login.validate().is_err());

        let short_login = register_request("al", "alice@example.com", "Password123!");
        assert!(short_login.validate().is_err());

        let bad_email = register_request("alice_01", "aliceexample.com", "Password123!");
        assert!(bad_email.validate().is_err());

        let short_password = register_request("alice_01", "alice@example.com", "pw1");
        assert!(short_password.validate().is_err());

        let mut empty_name = register_request("alice_01", "alice@example.com", "Password123!");
        empty_name.first_name = "".to_string();
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_login_request_allows_any_nonempty_password() {
        let login = LoginRequest {
            login: "alice".to_string(),
            password: "wrong".to_string(),
        };
        // Short but present: must reach the credential check.
        assert!(login.validate().is_ok());

        let empty = LoginRequest {
            login: "alice".to_string(),
            password: "".to_string(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_token_response_shape() {
        let response = TokenResponse::bearer("abc.def.ghi".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token"], "abc.def.ghi");
        assert_eq!(json["token_type"], "bearer");
    }
}
