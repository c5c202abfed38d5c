use crate::server::{config::Config, data::avatar::AvatarStore, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up to date before the server
/// accepts requests. Both SQLite and PostgreSQL URLs are accepted.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the avatar store and its directory below the configured upload directory.
pub async fn setup_avatar_store(config: &Config) -> Result<AvatarStore, AppError> {
    let avatars = AvatarStore::new(&config.upload_dir);
    avatars.ensure_dir().await?;

    tracing::info!("Storing avatars in {}", avatars.dir().display());

    Ok(avatars)
}

/// Resolves once the process receives Ctrl+C, letting in-flight requests finish.
pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        return;
    }

    tracing::info!("Shutdown signal received, stopping server");
}
