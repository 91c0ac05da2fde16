use std::sync::Arc;

use clap::Parser;
use poem::{listener::TcpListener, Server};

use masterfile_backend::api::build_app;
use masterfile_backend::app_data::AppData;
use masterfile_backend::cli::{migrate, Cli, Commands};
use masterfile_backend::config::{
    init_database, init_logging, migrate_database, BootstrapSettings, LoggingConfig,
};
use masterfile_backend::types::internal::CancelSignal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let logging_config = LoggingConfig::from_env();
    init_logging(&logging_config)?;

    let cli = Cli::parse();
    let bootstrap_settings = BootstrapSettings::from_env()?;
    tracing::debug!("Bootstrap settings: {:?}", bootstrap_settings);

    if cli.command() == Commands::Migrate {
        return migrate::run_migrations(&bootstrap_settings).await;
    }

    let db = init_database(&bootstrap_settings).await?;
    migrate_database(&db).await?;

    let (shutdown_handle, shutdown) = CancelSignal::pair();
    let app_data = Arc::new(AppData::init(db, &bootstrap_settings, shutdown));
    let app = build_app(app_data)?;

    let address = bootstrap_settings.server_address();
    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/swagger", address);

    Server::new(TcpListener::bind(address))
        .run_with_graceful_shutdown(
            app,
            async move {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for shutdown signal: {}", e);
                }
                tracing::info!("Shutdown requested; cancelling in-flight writes");
                shutdown_handle.cancel();
            },
            None,
        )
        .await?;

    Ok(())
}
