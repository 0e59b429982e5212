use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::PhoneNumber;
use crate::domain::account::ports::AccountRepository;

/// Process-local account store keyed by phone.
///
/// Uniqueness is checked under the write lock, so concurrent registrations of
/// one phone cannot both succeed.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<PhoneNumber, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&account.phone) {
            return Err(AccountError::PhoneAlreadyExists(account.phone.to_string()));
        }
        accounts.insert(account.phone.clone(), account.clone());

        Ok(account)
    }

    async fn find_by_phone(&self, phone: &PhoneNumber) -> Result<Option<Account>, AccountError> {
        Ok(self.accounts.read().await.get(phone).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::account::models::Username;

    fn account(username: &str, phone: &str) -> Account {
        Account::new(
            Username::parse(username).unwrap(),
            PhoneNumber::parse(phone).unwrap(),
            "$2b$04$hash".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repository = InMemoryAccountRepository::new();
        let created = repository
            .create(account("alice1", "+14155551234"))
            .await
            .unwrap();

        let found = repository
            .find_by_phone(&PhoneNumber::parse("+14155551234").unwrap())
            .await
            .unwrap()
            .expect("account should exist");

        assert_eq!(found.id, created.id);
        assert_eq!(found.username.as_str(), "alice1");
    }

    #[tokio::test]
    async fn test_find_missing() {
        let repository = InMemoryAccountRepository::new();
        let found = repository
            .find_by_phone(&PhoneNumber::parse("+14155551234").unwrap())
            .await
            .unwrap();

        assert!(found.is_none());
        assert!(repository.is_empty().await);
    }

    #[tokio::test]
    async fn test_duplicate_phone_rejected() {
        let repository = InMemoryAccountRepository::new();
        repository
            .create(account("alice1", "+14155551234"))
            .await
            .unwrap();

        let result = repository.create(account("bob2", "+14155551234")).await;

        assert!(matches!(result, Err(AccountError::PhoneAlreadyExists(_))));
        assert_eq!(repository.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_one_winner() {
        let repository = Arc::new(InMemoryAccountRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repository = Arc::clone(&repository);
                tokio::spawn(async move {
                    repository
                        .create(account(&format!("user{}", i), "+14155551234"))
                        .await
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repository.len().await, 1);
    }
}
