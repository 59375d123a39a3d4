use crate::time_zone::epoch_to_local;
use chrono_tz::Tz;
use querystats_domain::RawQueryRow;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

pub const SELECT_WINDOW: &str = "SELECT CAST(timestamp AS REAL) AS timestamp, domain, client,
            CAST(status AS INTEGER) AS status, CAST(reply_time AS REAL) AS reply_time
     FROM queries
     WHERE timestamp >= ? AND timestamp < ?";

pub const SELECT_WINDOW_FOR_CLIENT: &str = "SELECT CAST(timestamp AS REAL) AS timestamp, domain, client,
            CAST(status AS INTEGER) AS status, CAST(reply_time AS REAL) AS reply_time
     FROM queries
     WHERE timestamp >= ? AND timestamp < ? AND client = ?";

/// Maps one `queries` row without validating it. Columns that are NULL or of
/// an unexpected type come back as `None` and are rejected downstream.
pub fn row_to_raw(row: &SqliteRow, tz: Tz) -> RawQueryRow {
    let timestamp = row
        .try_get::<Option<f64>, _>("timestamp")
        .ok()
        .flatten()
        .and_then(|secs| epoch_to_local(secs, tz));

    RawQueryRow {
        timestamp,
        domain: row.try_get::<Option<String>, _>("domain").ok().flatten(),
        client: row.try_get::<Option<String>, _>("client").ok().flatten(),
        status: row.try_get::<Option<i64>, _>("status").ok().flatten(),
        reply_time: row.try_get::<Option<f64>, _>("reply_time").ok().flatten(),
    }
}
