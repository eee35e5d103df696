//! Todomvc server entry point.
//!
//! Loads configuration, selects the item store, and serves the router until
//! interrupted.

use std::sync::Arc;

use axum::http::HeaderName;
use axum::http::header::InvalidHeaderName;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use mockable::DefaultClock;
use thiserror::Error;
use tokio::net::TcpListener;
use todomvc::todo::adapters::memory::InMemoryTodoItemRepository;
use todomvc::todo::adapters::postgres::PostgresTodoItemRepository;
use todomvc::todo::ports::TodoItemRepository;
use todomvc::todo::services::TodoItemService;
use todomvc::web::csrf::CsrfTokens;
use todomvc::web::identity::TrustedHeaderIdentityProvider;
use todomvc::web::views::{ViewError, ViewRenderer};
use todomvc::web::{AppConfig, AppState, ConfigError, create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid identity header: {0}")]
    IdentityHeader(#[from] InvalidHeaderName),
    #[error("failed to build database pool: {0}")]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Views(#[from] ViewError),
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,todomvc=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting todomvc...");

    let config = AppConfig::from_env().inspect_err(|err| {
        tracing::error!("Failed to load configuration: {err}");
    })?;
    tracing::info!(
        "Configuration loaded: host={}, port={}",
        config.app_host,
        config.app_port
    );

    let state = build_state(&config)?;
    let app = create_router(state);

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("todomvc started on http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("todomvc stopped");
    Ok(())
}

fn build_state(config: &AppConfig) -> Result<AppState, StartupError> {
    let repository: Arc<dyn TodoItemRepository> = match &config.database_url {
        Some(url) => {
            let pool = Pool::builder()
                .max_size(config.database_pool_size)
                .build(ConnectionManager::<PgConnection>::new(url))?;
            tracing::info!("Item store: PostgreSQL");
            Arc::new(PostgresTodoItemRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; items are kept in memory only");
            Arc::new(InMemoryTodoItemRepository::new())
        }
    };

    let identity_header = HeaderName::try_from(config.identity_header.as_str())?;
    Ok(AppState::new(
        TodoItemService::new(repository, Arc::new(DefaultClock)),
        Arc::new(ViewRenderer::new()?),
        Arc::new(TrustedHeaderIdentityProvider::new(identity_header)),
        Arc::new(CsrfTokens::new(&config.csrf_secret)),
    ))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {err}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
