use std::sync::Arc;

use account_service::config::Config;
use account_service::config::StorageBackend;
use account_service::domain::account::service::AccountService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::InMemoryAccountRepository;
use account_service::outbound::repositories::PostgresAccountRepository;
use auth::password::hasher_for;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        storage = ?config.storage.backend,
        password_algorithm = ?config.password.algorithm,
        token_ttl_seconds = config.jwt.expiration_seconds,
        "Configuration loaded"
    );

    let password_hasher = hasher_for(config.password.algorithm, config.password.bcrypt_cost)?;

    let http_application = match config.storage.backend {
        StorageBackend::Postgres => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(&config.database.url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool));
            let account_service = Arc::new(AccountService::from_jwt_config(
                account_repository,
                password_hasher,
                &config.jwt,
            ));
            create_router(account_service)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; accounts are lost on restart");

            let account_repository = Arc::new(InMemoryAccountRepository::new());
            let account_service = Arc::new(AccountService::from_jwt_config(
                account_repository,
                password_hasher,
                &config.jwt,
            ));
            create_router(account_service)
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
