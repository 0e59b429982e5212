use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::BcryptHasher;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Couples a password hasher with a token signer.
///
/// Services hold one `Authenticator` per process; it is `Send + Sync` and
/// meant to be shared behind an `Arc`.
pub struct Authenticator {
    password_hasher: Box<dyn PasswordHasher>,
    jwt_handler: JwtHandler,
}

/// Password check errors. Token failures surface as `JwtError` directly.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),
}

impl Authenticator {
    /// Authenticator using bcrypt with the default cost.
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_hasher(jwt_secret, Box::new(BcryptHasher::new()))
    }

    pub fn with_hasher(jwt_secret: &[u8], password_hasher: Box<dyn PasswordHasher>) -> Self {
        Self {
            password_hasher,
            jwt_handler: JwtHandler::new(jwt_secret),
        }
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against its stored hash.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<(), AuthenticationError> {
        if self.password_hasher.verify(password, stored_hash)? {
            Ok(())
        } else {
            Err(AuthenticationError::InvalidCredentials)
        }
    }

    /// Sign claims into a bearer token.
    pub fn issue_token<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        self.jwt_handler.encode(claims)
    }

    /// Verify and decode a bearer token.
    pub fn validate_token<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        self.jwt_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::jwt::Claims;
    use crate::password::Argon2Hasher;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn authenticator() -> Authenticator {
        Authenticator::with_hasher(SECRET, Box::new(BcryptHasher::with_cost(4).unwrap()))
    }

    #[test]
    fn test_verify_password_success() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("secret1").unwrap();

        assert!(authenticator.verify_password("secret1", &hash).is_ok());
    }

    #[test]
    fn test_verify_password_mismatch() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("secret1").unwrap();

        assert!(matches!(
            authenticator.verify_password("wrong", &hash),
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_password_malformed_hash() {
        assert!(matches!(
            authenticator().verify_password("secret1", "not-a-hash"),
            Err(AuthenticationError::PasswordError(_))
        ));
    }

    #[test]
    fn test_issue_and_validate_token() {
        let authenticator = authenticator();
        let claims = Claims::for_subject("account-1", Duration::hours(1))
            .with_extra("username", "alice1")
            .with_extra("phone", "+14155551234");

        let token = authenticator.issue_token(&claims).unwrap();
        let decoded: Claims = authenticator.validate_token(&token).unwrap();

        assert_eq!(decoded.sub.as_deref(), Some("account-1"));
        assert_eq!(decoded.username(), Some("alice1"));
        assert_eq!(decoded.phone(), Some("+14155551234"));
    }

    #[test]
    fn test_validate_invalid_token() {
        let result = authenticator().validate_token::<Claims>("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_with_argon2_hasher() {
        let authenticator = Authenticator::with_hasher(SECRET, Box::new(Argon2Hasher::new()));
        let hash = authenticator.hash_password("secret1").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(authenticator.verify_password("secret1", &hash).is_ok());
    }
}
