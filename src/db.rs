//! Opening the embedded SQLite store and bringing its schema up to date.
//!
//! Both steps run once at startup (and in the seeder); a failure in either is
//! fatal for the process.

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum GatewayError {
    /// The database file or its directory could not be created or opened
    StorageUnavailable { path: String, message: String },
    /// Migrations failed against an open connection
    Schema(DbErr),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::StorageUnavailable { path, message } => {
                write!(f, "Storage at '{path}' is unavailable: {message}")
            }
            GatewayError::Schema(err) => write!(f, "Failed to ensure database schema: {err}"),
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::StorageUnavailable { .. } => None,
            GatewayError::Schema(err) => Some(err),
        }
    }
}

/// Open (creating if needed) the SQLite database at `path`.
///
/// The parent directory is created when missing. The sqlx SQLite driver
/// enables `foreign_keys` on every pooled connection, which the cascade
/// constraints of the oilfield tables depend on.
pub async fn open(path: &Path) -> Result<DatabaseConnection, GatewayError> {
    let unavailable = |message: String| GatewayError::StorageUnavailable {
        path: path.display().to_string(),
        message,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| unavailable(e.to_string()))?;
    }

    let url = format!("sqlite://{}?mode=rwc", path.display());
    let db = Database::connect(url)
        .await
        .map_err(|e| unavailable(e.to_string()))?;

    db.ping().await.map_err(|e| unavailable(e.to_string()))?;

    tracing::info!("Opened database at {}", path.display());
    Ok(db)
}

/// Create every table that does not exist yet. Safe to call on each start.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), GatewayError> {
    Migrator::up(db, None).await.map_err(GatewayError::Schema)?;
    tracing::info!("DB migrations complete");
    Ok(())
}
