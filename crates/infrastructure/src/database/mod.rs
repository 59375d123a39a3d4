use querystats_domain::DomainError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::{error, info};

/// Opens a read-only pool over an existing FTL database.
///
/// The file is never created: a missing path is `SourceNotFound`.
pub async fn open_read_pool(path: &str) -> Result<SqlitePool, DomainError> {
    if !Path::new(path).is_file() {
        return Err(DomainError::SourceNotFound(path.to_string()));
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(2)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!(path, error = %e, "Failed to open query log database");
            DomainError::DatabaseError(e.to_string())
        })?;

    info!(path, "Query log database opened");
    Ok(pool)
}
