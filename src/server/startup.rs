use std::time::Duration;

use crate::server::{config::Config, error::AppError};

/// Timeout applied to every outbound HTTP call.
///
/// Remote copy requests and probes are not retried; a call that cannot
/// complete within this window is classified by the caller instead.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the
/// application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for all outbound requests.
///
/// Redirects are disabled so a phase service cannot bounce copy requests to
/// arbitrary hosts.
pub fn setup_http_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}
