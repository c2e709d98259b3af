// Main entry point for the briefcast API server

use std::sync::Arc;

use anyhow::{Context, Result};
use parallel_client::ParallelClient;
use server_core::kernel::{AzureEmbeddingService, ParallelContentService, ServerDeps};
use server_core::server::build_app;
use server_core::Config;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Briefcast API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    // Wire dependencies
    let embedding_service = Arc::new(AzureEmbeddingService::new(
        config.azure_openai_api_key.clone(),
        config.azure_openai_endpoint.clone(),
        config.azure_openai_api_version.clone(),
        config.azure_openai_embedding_deployment.clone(),
    ));

    let content_service = config.parallel_api_key.clone().map(|key| {
        Arc::new(ParallelContentService::new(Arc::new(ParallelClient::new(
            key,
        )))) as Arc<dyn server_core::kernel::BaseContentService>
    });
    if content_service.is_none() {
        tracing::warn!("PARALLEL_API_KEY not set; workflow endpoint disabled");
    }

    let deps = ServerDeps::new(pool, embedding_service, content_service);

    // Build and start the server
    let app = build_app(deps);
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
