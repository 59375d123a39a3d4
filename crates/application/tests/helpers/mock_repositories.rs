use async_trait::async_trait;
use querystats_application::ports::QueryLogReader;
use querystats_domain::{DomainError, QueryWindow, RawQueryRow};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockQueryLogReader {
    rows: Arc<RwLock<Vec<RawQueryRow>>>,
    failure: Arc<RwLock<Option<DomainError>>>,
    windows: Arc<RwLock<Vec<QueryWindow>>>,
}

impl MockQueryLogReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<RawQueryRow>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
            ..Self::default()
        }
    }

    pub async fn set_rows(&self, rows: Vec<RawQueryRow>) {
        *self.rows.write().await = rows;
    }

    pub async fn fail_with(&self, error: DomainError) {
        *self.failure.write().await = Some(error);
    }

    /// Windows passed to `read_window`, oldest first.
    pub async fn requested_windows(&self) -> Vec<QueryWindow> {
        self.windows.read().await.clone()
    }
}

#[async_trait]
impl QueryLogReader for MockQueryLogReader {
    async fn read_window(&self, window: &QueryWindow) -> Result<Vec<RawQueryRow>, DomainError> {
        self.windows.write().await.push(window.clone());
        if let Some(error) = self.failure.read().await.clone() {
            return Err(error);
        }
        Ok(self.rows.read().await.clone())
    }
}
