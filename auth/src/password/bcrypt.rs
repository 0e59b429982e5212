use super::errors::PasswordError;
use super::PasswordHasher;

/// Bcrypt password hasher.
///
/// The work factor is fixed per instance and encoded in every hash it produces,
/// so hashes created with an older cost still verify after the cost changes.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Work factor used unless configured otherwise.
    pub const DEFAULT_COST: u32 = 10;

    const MIN_COST: u32 = 4;
    const MAX_COST: u32 = 31;

    /// Create a hasher with the default work factor (10).
    pub fn new() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit work factor.
    ///
    /// # Errors
    /// * `InvalidCost` - Cost outside bcrypt's 4..=31 range
    pub fn with_cost(cost: u32) -> Result<Self, PasswordError> {
        if !(Self::MIN_COST..=Self::MAX_COST).contains(&cost) {
            return Err(PasswordError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        ::bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        ::bcrypt::verify(password, hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cost_is_ten() {
        let hasher = BcryptHasher::new();
        let hash = hasher.hash("secret1").expect("Failed to hash password");

        assert_eq!(hasher.cost(), 10);
        assert!(hash.starts_with("$2b$10$"));
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = BcryptHasher::with_cost(4).unwrap();
        let hash = hasher.hash("my_secure_password").unwrap();

        assert!(hasher.verify("my_secure_password", &hash).unwrap());
        assert!(!hasher.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = BcryptHasher::with_cost(4).unwrap();
        let first = hasher.hash("secret1").unwrap();
        let second = hasher.hash("secret1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("secret1", &second).unwrap());
    }

    #[test]
    fn test_verify_hash_from_other_cost() {
        let old = BcryptHasher::with_cost(5).unwrap().hash("secret1").unwrap();
        assert!(BcryptHasher::with_cost(4)
            .unwrap()
            .verify("secret1", &old)
            .unwrap());
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = BcryptHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }

    #[test]
    fn test_cost_bounds() {
        assert!(BcryptHasher::with_cost(3).is_err());
        assert!(BcryptHasher::with_cost(32).is_err());
        assert!(BcryptHasher::with_cost(4).is_ok());
    }
}
