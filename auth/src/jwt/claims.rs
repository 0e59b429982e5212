use std::collections::HashMap;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// JWT claims.
///
/// Registered RFC 7519 claims plus arbitrary identity fields flattened into
/// the payload through `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (account identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims for a subject, issued now and valid for `ttl`.
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: Some(subject.to_string()),
            exp: Some((now + ttl).timestamp()),
            iat: Some(now.timestamp()),
            ..Self::default()
        }
    }

    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Add a custom field. Takes an already-built JSON value, so it cannot fail.
    pub fn with_extra(mut self, key: impl ToString, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }

    /// String value of a custom field, if present.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(|v| v.as_str())
    }

    pub fn username(&self) -> Option<&str> {
        self.extra_str("username")
    }

    pub fn phone(&self) -> Option<&str> {
        self.extra_str("phone")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("account-1", Duration::hours(2));

        assert_eq!(claims.sub.as_deref(), Some("account-1"));
        let exp = claims.exp.unwrap();
        let iat = claims.iat.unwrap();
        assert_eq!(exp - iat, 2 * 60 * 60);
    }

    #[test]
    fn test_identity_extras() {
        let claims = Claims::new()
            .with_subject("account-1")
            .with_extra("username", "alice1")
            .with_extra("phone", "+14155551234");

        assert_eq!(claims.username(), Some("alice1"));
        assert_eq!(claims.phone(), Some("+14155551234"));
        assert_eq!(claims.extra_str("missing"), None);
    }

    #[test]
    fn test_extras_are_flattened() {
        let claims = Claims::new()
            .with_subject("account-1")
            .with_extra("phone", "+14155551234");

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["sub"], "account-1");
        assert_eq!(json["phone"], "+14155551234");
        assert!(json.get("exp").is_none());
        assert!(json.get("extra").is_none());
    }

    #[test]
    fn test_extra_values_are_kept_verbatim() {
        let claims = Claims::new()
            .with_extra("username", String::from("alice1"))
            .with_extra("role_id", serde_json::Value::Null)
            .with_extra("active", true);

        assert_eq!(claims.username(), Some("alice1"));
        assert_eq!(claims.extra.get("role_id"), Some(&serde_json::Value::Null));
        assert_eq!(claims.extra.get("active"), Some(&serde_json::Value::Bool(true)));
        assert_eq!(claims.extra.len(), 3);
    }
}
