use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use auth::PasswordHasher;
use chrono::Duration;

use crate::config::JwtConfig;
use crate::domain::account::errors::AccountError;
use crate::domain::account::errors::PhoneError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AuthenticatedAccount;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::Password;
use crate::domain::account::models::PhoneNumber;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::account::validation::FieldError;
use crate::domain::account::validation::ValidationErrors;

/// Domain service implementation for account operations.
///
/// Signing secret and hasher live in the injected `Authenticator`; token
/// lifetime is passed explicitly so tests control it.
pub struct AccountService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
    token_ttl: Duration,
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `authenticator` - Password hasher and token signer
    /// * `token_ttl` - Lifetime of issued bearer tokens
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>, token_ttl: Duration) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl,
        }
    }

    /// Create a service whose token secret and lifetime come from `JwtConfig`.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `password_hasher` - Hasher chosen from the password settings
    /// * `jwt` - Signing secret and token lifetime
    pub fn from_jwt_config(
        repository: Arc<R>,
        password_hasher: Box<dyn PasswordHasher>,
        jwt: &JwtConfig,
    ) -> Self {
        let authenticator = Authenticator::with_hasher(jwt.secret.as_bytes(), password_hasher);
        Self::new(repository, Arc::new(authenticator), jwt.token_ttl())
    }

    // Hashing is CPU-bound; keep it off the async workers.
    async fn hash_password(&self, password: Password) -> Result<String, AccountError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
            .await
            .map_err(|e| AccountError::Unknown(format!("Password hashing task failed: {}", e)))?
            .map_err(AccountError::from)
    }

    async fn verify_password(
        &self,
        password: Password,
        stored_hash: String,
    ) -> Result<(), AccountError> {
        let authenticator = Arc::clone(&self.authenticator);

        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.verify_password(password.expose(), &stored_hash)
        })
        .await
        .map_err(|e| AccountError::Unknown(format!("Password verification task failed: {}", e)))?;

        outcome.map_err(|e| match e {
            AuthenticationError::InvalidCredentials => AccountError::InvalidCredentials,
            AuthenticationError::PasswordError(err) => AccountError::Password(err),
        })
    }

    fn claims_for(&self, account: &Account) -> Claims {
        Claims::for_subject(account.id, self.token_ttl)
            .with_extra("username", account.username.as_str())
            .with_extra("phone", account.phone.as_str())
    }
}

#[async_trait]
impl<R> AccountServicePort for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError> {
        let mut errors = ValidationErrors::new();
        let username = errors.collect(Username::parse(&command.username));
        let phone = errors.collect(PhoneNumber::parse(&command.phone));
        let password = errors.collect(Password::for_registration(&command.password));

        // Fast path for a friendly error; the store's unique constraint is authoritative.
        if let Some(phone) = &phone {
            if self.repository.find_by_phone(phone).await?.is_some() {
                errors.push(PhoneError::AlreadyInUse);
            }
        }

        let (username, phone, password) = match (username, phone, password) {
            (Some(username), Some(phone), Some(password)) if errors.is_empty() => {
                (username, phone, password)
            }
            _ => {
                tracing::debug!(failures = errors.len(), "Registration rejected");
                return Err(AccountError::Validation(errors));
            }
        };

        let password_hash = self.hash_password(password).await?;
        let account = Account::new(username, phone, password_hash);

        let created = self
            .repository
            .create(account)
            .await
            .map_err(|e| match e {
                AccountError::PhoneAlreadyExists(_) => {
                    ValidationErrors::from(FieldError::from(PhoneError::AlreadyInUse)).into()
                }
                other => other,
            })?;

        tracing::info!(account_id = %created.id, "Account registered");

        Ok(created)
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthenticatedAccount, AccountError> {
        let mut errors = ValidationErrors::new();
        let phone = errors.collect(PhoneNumber::parse(&command.phone));
        let password = errors.collect(Password::for_login(&command.password));

        let (phone, password) = match (phone, password) {
            (Some(phone), Some(password)) => (phone, password),
            _ => return Err(AccountError::Validation(errors)),
        };

        let Some(account) = self.repository.find_by_phone(&phone).await? else {
            tracing::warn!("Login rejected: invalid credentials");
            return Err(AccountError::InvalidCredentials);
        };

        if let Err(e) = self
            .verify_password(password, account.password_hash.clone())
            .await
        {
            if matches!(e, AccountError::InvalidCredentials) {
                tracing::warn!("Login rejected: invalid credentials");
            }
            return Err(e);
        }

        // No operation here deactivates accounts; the flag is set by administrators.
        if !account.active {
            tracing::warn!(account_id = %account.id, "Login rejected: account inactive");
            return Err(AccountError::AccountInactive);
        }

        let token = self.authenticator.issue_token(&self.claims_for(&account))?;

        tracing::info!(account_id = %account.id, "Account logged in");

        Ok(AuthenticatedAccount { account, token })
    }
}
