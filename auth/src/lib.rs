//! Authentication primitives shared by services.
//!
//! - Password hashing behind the [`PasswordHasher`] trait (bcrypt by default, Argon2id optional)
//! - HS256 JWT signing and verification
//! - [`Authenticator`] combining both
//!
//! The crate knows nothing about accounts or storage; services decide which
//! identity fields go into [`Claims`].
//!
//! # Examples
//!
//! ```
//! use auth::{Authenticator, BcryptHasher, Claims};
//! use chrono::Duration;
//!
//! let auth = Authenticator::with_hasher(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Box::new(BcryptHasher::with_cost(4).unwrap()),
//! );
//!
//! // Register: hash password
//! let hash = auth.hash_password("secret1").unwrap();
//!
//! // Login: verify and issue token
//! auth.verify_password("secret1", &hash).unwrap();
//! let claims = Claims::for_subject("account-1", Duration::hours(2)).with_extra("username", "alice1");
//! let token = auth.issue_token(&claims).unwrap();
//!
//! let decoded: Claims = auth.validate_token(&token).unwrap();
//! assert_eq!(decoded.username(), Some("alice1"));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::Argon2Hasher;
pub use password::BcryptHasher;
pub use password::HashAlgorithm;
pub use password::PasswordError;
pub use password::PasswordHasher;
