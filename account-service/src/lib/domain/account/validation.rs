use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::account::errors::PasswordPolicyError;
use crate::domain::account::errors::PhoneError;
use crate::domain::account::errors::UsernameError;

/// Digits, optionally grouped in parentheses, joined by at most one space or hyphen.
static PHONE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?(?:\d|\(\d{1,4}\))(?:[ -]?(?:\d|\(\d{1,4}\)))*$").expect("valid phone regex")
});

const PHONE_MIN_DIGITS: usize = 7;
const PHONE_MAX_DIGITS: usize = 15;

/// Check phone syntax: optional `+`, 7 to 15 digits, light separators.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) && PHONE_SHAPE.is_match(phone)
}

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl ToString) -> Self {
        Self {
            field: field.into(),
            message: message.to_string(),
        }
    }
}

impl From<UsernameError> for FieldError {
    fn from(err: UsernameError) -> Self {
        FieldError::new("username", err)
    }
}

impl From<PhoneError> for FieldError {
    fn from(err: PhoneError) -> Self {
        FieldError::new("phone", err)
    }
}

impl From<PasswordPolicyError> for FieldError {
    fn from(err: PasswordPolicyError) -> Self {
        FieldError::new("password", err)
    }
}

/// Every field error found in one request, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: impl Into<FieldError>) {
        self.0.push(error.into());
    }

    /// Record the error of a failed check and keep going.
    pub fn collect<T, E: Into<FieldError>>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}
