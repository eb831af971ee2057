use crate::error::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};

/// Hashes a plaintext password with bcrypt (salted, adaptive).
///
/// Two calls with the same plaintext produce different hashes (fresh salt),
/// but verification against either is reproducible. The plaintext is never
/// logged or stored.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST).map_err(AppError::from)
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// Returns `false` for a malformed hash rather than erroring, so a corrupt
/// credential row behaves like a failed login instead of a server fault.
pub fn verify_password(password: &str, hashed_password: &str) -> bool {
    verify(password, hashed_password).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let password = "test_password123";
        let hashed = hash_password(password).unwrap();
        assert_ne!(hashed, password);
    }

    #[test]
    fn test_password_hashing_and_verification() {
        let password = "test_password123";
        let hashed = hash_password(password).unwrap();

        assert!(verify_password(password, &hashed));
        assert!(!verify_password("wrong_password", &hashed));
    }

    #[test]
    fn test_same_plaintext_hashes_differently() {
        let password = "test_password123";
        let first = hash_password(password).unwrap();
        let second = hash_password(password).unwrap();

        // Fresh salt each time, yet both verify.
        assert_ne!(first, second);
        assert!(verify_password(password, &first));
        assert!(verify_password(password, &second));
    }

    #[test]
    fn test_verify_with_malformed_hash_is_false() {
        assert!(!verify_password("test_password123", "invalidhashformat"));
        assert!(!verify_password("test_password123", ""));
    }
}
