pub mod argon2;
pub mod bcrypt;
pub mod errors;

use serde::Deserialize;

pub use self::argon2::Argon2Hasher;
pub use self::bcrypt::BcryptHasher;
pub use errors::PasswordError;

/// One-way salted password hashing.
///
/// Implementations must embed the salt and parameters in the returned string
/// so that `verify` needs nothing but the stored hash.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with a fresh random salt.
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}

/// Supported hashing algorithms, selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Bcrypt,
    Argon2,
}

/// Build the hasher for an algorithm. `bcrypt_cost` is ignored for Argon2.
pub fn hasher_for(
    algorithm: HashAlgorithm,
    bcrypt_cost: u32,
) -> Result<Box<dyn PasswordHasher>, PasswordError> {
    match algorithm {
        HashAlgorithm::Bcrypt => Ok(Box::new(BcryptHasher::with_cost(bcrypt_cost)?)),
        HashAlgorithm::Argon2 => Ok(Box::new(Argon2Hasher::new())),
    }
}
