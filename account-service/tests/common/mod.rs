use std::sync::Arc;

use account_service::domain::account::models::Account;
use account_service::domain::account::models::PhoneNumber;
use account_service::domain::account::models::Username;
use account_service::domain::account::ports::AccountRepository;
use account_service::domain::account::service::AccountService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::InMemoryAccountRepository;
use auth::Authenticator;
use auth::BcryptHasher;
use auth::JwtHandler;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over the in-memory store
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryAccountRepository>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryAccountRepository::new());

        // Lowest bcrypt cost keeps the suite fast
        let hasher = BcryptHasher::with_cost(4).expect("cost 4 is valid");
        let authenticator = Arc::new(Authenticator::with_hasher(JWT_SECRET, Box::new(hasher)));

        let account_service = Arc::new(AccountService::new(
            Arc::clone(&repository),
            Arc::clone(&authenticator),
            chrono::Duration::hours(2),
        ));

        let router = create_router(account_service);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
            authenticator,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Insert a disabled account directly into the store; registration
    /// always creates active accounts.
    pub async fn seed_inactive_account(&self, username: &str, phone: &str, password: &str) {
        let password_hash = self
            .authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let mut account = Account::new(
            Username::parse(username).expect("valid username"),
            PhoneNumber::parse(phone).expect("valid phone"),
            password_hash,
        );
        account.active = false;

        self.repository
            .create(account)
            .await
            .expect("Failed to seed account");
    }
}
