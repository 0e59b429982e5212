use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

use crate::domain::account::validation::ValidationErrors;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("username must be specified.")]
    Missing,

    #[error("username has non-alphanumeric characters.")]
    NonAlphanumeric,
}

/// Error for PhoneNumber validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("phone must be specified.")]
    Missing,

    #[error("phone must be a valid phone.")]
    InvalidFormat,

    #[error("phone already in use")]
    AlreadyInUse,
}

/// Error for password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("password must be specified.")]
    Missing,

    #[error("Password must be 6 characters or greater.")]
    TooShort,
}

/// Top-level error for all account operations.
///
/// The display strings of `InvalidCredentials` and `AccountInactive` are
/// returned to clients verbatim.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    #[error("Validation Error.")]
    Validation(ValidationErrors),

    /// Unknown phone and wrong password share this variant.
    #[error("phone or Password wrong.")]
    InvalidCredentials,

    #[error("Account is not active. Please contact admin.")]
    AccountInactive,

    /// Raised by storage when the phone uniqueness constraint fires.
    #[error("Phone already exists: {0}")]
    PhoneAlreadyExists(String),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<ValidationErrors> for AccountError {
    fn from(errors: ValidationErrors) -> Self {
        AccountError::Validation(errors)
    }
}
