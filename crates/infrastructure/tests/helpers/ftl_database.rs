use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway FTL-shaped database on disk.
pub struct FtlDatabase {
    pub path: PathBuf,
    pool: SqlitePool,
}

impl FtlDatabase {
    pub async fn create(dir: &TempDir, name: &str) -> Self {
        let path = dir.path().join(name);
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();

        sqlx::query(
            r#"
            CREATE TABLE queries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp INTEGER NOT NULL,
                type INTEGER NOT NULL DEFAULT 1,
                status INTEGER,
                domain TEXT,
                client TEXT,
                forward TEXT,
                additional_info TEXT,
                reply_type INTEGER,
                reply_time REAL,
                dnssec INTEGER
            )
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        Self { path, pool }
    }

    pub fn path_string(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    pub async fn insert(
        &self,
        timestamp: i64,
        domain: Option<&str>,
        client: Option<&str>,
        status: Option<i64>,
        reply_time: Option<f64>,
    ) {
        sqlx::query(
            "INSERT INTO queries (timestamp, domain, client, status, reply_time)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(timestamp)
        .bind(domain)
        .bind(client)
        .bind(status)
        .bind(reply_time)
        .execute(&self.pool)
        .await
        .unwrap();
    }

    pub async fn query(&self, timestamp: i64, domain: &str, client: &str, status: i64) {
        self.insert(timestamp, Some(domain), Some(client), Some(status), None)
            .await;
    }

    pub async fn close(self) -> PathBuf {
        self.pool.close().await;
        self.path
    }
}
