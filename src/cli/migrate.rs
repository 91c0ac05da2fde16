use crate::config::{init_database, migrate_database, BootstrapSettings};

/// Run database migrations and exit
///
/// Connects with the bootstrap settings and applies every pending migration.
/// It does not initialize the full AppData structure.
pub async fn run_migrations(bootstrap_settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running database migrations...");

    let db = init_database(bootstrap_settings).await?;
    migrate_database(&db).await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}
