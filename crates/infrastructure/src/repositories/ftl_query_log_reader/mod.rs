mod helpers;
mod reader;

use crate::database::open_read_pool;
use crate::time_zone::TimestampRange;
use async_trait::async_trait;
use chrono::Utc;
use chrono_tz::Tz;
use futures::future::try_join_all;
use querystats_application::ports::QueryLogReader;
use querystats_domain::{DomainError, QueryWindow, RawQueryRow};
use sqlx::SqlitePool;
use tracing::info;

struct FtlSource {
    path: String,
    pool: SqlitePool,
}

/// Reads the `queries` table of one or more Pi-hole FTL databases.
///
/// Rows from every source are concatenated in source order; ordering is left
/// to the metrics engine.
pub struct FtlQueryLogReader {
    sources: Vec<FtlSource>,
    timezone: Tz,
}

impl FtlQueryLogReader {
    pub async fn open(paths: &[String], timezone: Tz) -> Result<Self, DomainError> {
        if paths.is_empty() {
            return Err(DomainError::ConfigError(
                "no query log database configured".to_string(),
            ));
        }

        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let pool = open_read_pool(path).await?;
            sources.push(FtlSource {
                path: path.clone(),
                pool,
            });
        }

        info!(sources = sources.len(), timezone = %timezone, "FTL query log reader ready");
        Ok(Self { sources, timezone })
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

#[async_trait]
impl QueryLogReader for FtlQueryLogReader {
    async fn read_window(&self, window: &QueryWindow) -> Result<Vec<RawQueryRow>, DomainError> {
        let range = TimestampRange::for_window(window, self.timezone, Utc::now())?;
        let client = window.client.as_deref();

        let per_source = try_join_all(self.sources.iter().map(|source| {
            reader::read_range(&source.pool, &source.path, range, client, self.timezone)
        }))
        .await?;

        Ok(per_source.into_iter().flatten().collect())
    }
}
