use async_trait::async_trait;
use querystats_domain::{DomainError, QueryWindow, RawQueryRow};

/// Source of raw query-log rows for a window.
///
/// Rows come back unvalidated and in no guaranteed order; timestamps are
/// already in the zone the reader was configured with.
#[async_trait]
pub trait QueryLogReader: Send + Sync {
    async fn read_window(&self, window: &QueryWindow) -> Result<Vec<RawQueryRow>, DomainError>;
}
