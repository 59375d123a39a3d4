use super::helpers::{row_to_raw, SELECT_WINDOW, SELECT_WINDOW_FOR_CLIENT};
use crate::time_zone::TimestampRange;
use chrono_tz::Tz;
use querystats_domain::{DomainError, RawQueryRow};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

#[instrument(skip(pool, tz))]
pub(super) async fn read_range(
    pool: &SqlitePool,
    path: &str,
    range: TimestampRange,
    client: Option<&str>,
    tz: Tz,
) -> Result<Vec<RawQueryRow>, DomainError> {
    let rows = match client {
        Some(client) => {
            sqlx::query(SELECT_WINDOW_FOR_CLIENT)
                .bind(range.start)
                .bind(range.end)
                .bind(client)
                .fetch_all(pool)
                .await
        }
        None => {
            sqlx::query(SELECT_WINDOW)
                .bind(range.start)
                .bind(range.end)
                .fetch_all(pool)
                .await
        }
    }
    .map_err(|e| {
        error!(path, error = %e, "Failed to read query log");
        DomainError::DatabaseError(e.to_string())
    })?;

    let entries: Vec<RawQueryRow> = rows.iter().map(|row| row_to_raw(row, tz)).collect();
    debug!(path, count = entries.len(), "Query log rows read");
    Ok(entries)
}
