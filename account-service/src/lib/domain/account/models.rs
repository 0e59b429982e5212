use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::account::errors::PasswordPolicyError;
use crate::domain::account::errors::PhoneError;
use crate::domain::account::errors::UsernameError;
use crate::domain::account::sanitize::escape_html;
use crate::domain::account::validation::is_valid_phone;

/// Account aggregate entity.
///
/// Represents a registered credential record
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub username: Username,
    pub phone: PhoneNumber,
    pub password_hash: String,
    /// Carried for administrators; no logic reads it.
    pub role_id: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// New active account with fresh identifier and timestamps.
    pub fn new(username: Username, phone: PhoneNumber, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            username,
            phone,
            password_hash,
            role_id: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID (UUID v4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Non-empty, ASCII letters and digits only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Trim, validate and escape a raw username.
    ///
    /// # Errors
    /// * `Missing` - Empty after trimming
    /// * `NonAlphanumeric` - Contains anything but ASCII letters and digits
    pub fn parse(raw: &str) -> Result<Self, UsernameError> {
        let username = raw.trim();
        if username.is_empty() {
            return Err(UsernameError::Missing);
        }
        if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(UsernameError::NonAlphanumeric);
        }
        Ok(Self(escape_html(username)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Phone number value type
///
/// Stored exactly as entered (after trimming); no normalisation, so
/// `+14155551234` and `+1 415 555 1234` are distinct numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Trim, validate and escape a raw phone number.
    ///
    /// # Errors
    /// * `Missing` - Empty after trimming
    /// * `InvalidFormat` - Not a syntactically valid phone number
    pub fn parse(raw: &str) -> Result<Self, PhoneError> {
        let phone = raw.trim();
        if phone.is_empty() {
            return Err(PhoneError::Missing);
        }
        if !is_valid_phone(phone) {
            return Err(PhoneError::InvalidFormat);
        }
        Ok(Self(escape_html(phone)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Sanitised plaintext password, only ever handed to the hasher.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 6;

    /// Password for a new account: at least 6 characters after trimming.
    pub fn for_registration(raw: &str) -> Result<Self, PasswordPolicyError> {
        let password = raw.trim();
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort);
        }
        Ok(Self(escape_html(password)))
    }

    /// Password presented at login: only required to be non-empty.
    pub fn for_login(raw: &str) -> Result<Self, PasswordPolicyError> {
        let password = raw.trim();
        if password.is_empty() {
            return Err(PasswordPolicyError::Missing);
        }
        Ok(Self(escape_html(password)))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Raw registration input, validated by the service.
#[derive(Debug, Clone, Default)]
pub struct RegisterCommand {
    pub username: String,
    pub phone: String,
    pub password: String,
}

impl RegisterCommand {
    pub fn new(
        username: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            phone: phone.into(),
            password: password.into(),
        }
    }
}

/// Raw login input, validated by the service.
#[derive(Debug, Clone, Default)]
pub struct LoginCommand {
    pub phone: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(phone: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            password: password.into(),
        }
    }
}

/// Successful login: the account and its freshly signed bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account: Account,
    pub token: String,
}
