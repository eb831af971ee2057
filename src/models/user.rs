use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user record as returned by the API.
///
/// Deliberately carries no `password_hash` field: every query that produces
/// a `User` projects the hash away, so it cannot leak through serialization.
#[derive(Debug, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    pub id: i32,
    pub login: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Assigned once at registration from the server clock; immutable.
    pub created_at: NaiveDate,
}

/// The credential row used during login. Never serialized to clients.
#[derive(Debug, FromRow)]
pub struct Credentials {
    pub id: i32,
    pub login: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_has_no_hash() {
        let user = User {
            id: 1,
            login: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Martin".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["login"], "alice");
        assert_eq!(json["created_at"], "2024-03-01");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
    }
}
