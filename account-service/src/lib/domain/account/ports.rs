use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AuthenticatedAccount;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::PhoneNumber;
use crate::domain::account::models::RegisterCommand;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Arguments
    /// * `command` - Raw username, phone and password
    ///
    /// # Returns
    /// Created account entity
    ///
    /// # Errors
    /// * `Validation` - One entry per failed rule, including a duplicate phone
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError>;

    /// Authenticate by phone and password and issue a bearer token.
    ///
    /// # Arguments
    /// * `command` - Raw phone and password
    ///
    /// # Returns
    /// Account plus signed token
    ///
    /// # Errors
    /// * `Validation` - Phone or password malformed
    /// * `InvalidCredentials` - Unknown phone or wrong password (indistinguishable)
    /// * `AccountInactive` - Credentials correct but account disabled
    /// * `Password`, `Token`, `DatabaseError` - Infrastructure failures
    async fn login(&self, command: LoginCommand) -> Result<AuthenticatedAccount, AccountError>;
}

/// Persistence operations for the account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Errors
    /// * `PhoneAlreadyExists` - Storage uniqueness constraint on phone fired
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve the account registered with a phone number.
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_phone(&self, phone: &PhoneNumber) -> Result<Option<Account>, AccountError>;
}
