use dioxus_logger::tracing;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::Error};

/// Connect to the database and run migrations
///
/// The returned connection is a pool; clone it into each [`SqlRepository`] that needs it.
///
/// [`SqlRepository`]: crate::repository::SqlRepository
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(config.database_sql_logging);

    let db = Database::connect(opt).await?;

    tracing::info!(
        "Connected to database with up to {} connections",
        config.database_max_connections
    );

    Migrator::up(&db, None).await?;

    tracing::info!("Database migrations applied");

    Ok(db)
}
