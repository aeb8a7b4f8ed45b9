//! Database configuration and schema bootstrap.
//!
//! This module handles `SQLite` connection setup and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs, and creation is idempotent.

use crate::entities::{DealerProfile, Expense, Vehicle};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default database location when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/dealer_ledger.sqlite?mode=rwc";

/// Gets the database URL from the environment, falling back to a local `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Connects to the database at `database_url`, creating the parent directory of a
/// file-backed `SQLite` database first.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    if let Some(dir) = sqlite_parent_dir(database_url) {
        debug!(?dir, "Ensuring database directory exists");
        std::fs::create_dir_all(dir)?;
    }
    info!("Connecting to database");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Directory holding the database file of a `sqlite://` URL. `None` for
/// in-memory databases and paths without a directory component.
fn sqlite_parent_dir(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let file = rest.split('?').next()?;
    if file.is_empty() || file.contains(":memory:") {
        return None;
    }
    Path::new(file)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(builder.build(&statement)).await?;
    Ok(())
}

/// Creates every table that does not exist yet. Vehicles come first so the
/// expense foreign key has a target.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, Vehicle).await?;
    create_table(db, &schema, Expense).await?;
    create_table(db, &schema, DealerProfile).await?;

    Ok(())
}
