use crate::services::WindowLoader;
use crate::stats::{
    aggregates::{client_breakdown, top_domains},
    temporal::sort_chronologically,
    ClientBreakdown,
};
use querystats_domain::{DomainError, QueryWindow, RankedEntry, Verdict};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

pub const MAX_TOP_LIMIT: usize = 100;

#[derive(Debug, Clone, Serialize)]
pub struct TopEntries {
    pub window: QueryWindow,
    pub allowed_domains: Vec<RankedEntry>,
    pub blocked_domains: Vec<RankedEntry>,
    pub clients: Vec<ClientBreakdown>,
}

pub struct GetTopEntriesUseCase {
    loader: Arc<WindowLoader>,
}

impl GetTopEntriesUseCase {
    pub fn new(loader: Arc<WindowLoader>) -> Self {
        Self { loader }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, window: QueryWindow, limit: usize) -> Result<TopEntries, DomainError> {
        let limit = limit.min(MAX_TOP_LIMIT);
        let loaded = self.loader.load(&window).await?;
        let records = sort_chronologically(&loaded.records);

        Ok(TopEntries {
            allowed_domains: top_domains(&records, Verdict::Allowed, limit),
            blocked_domains: top_domains(&records, Verdict::Blocked, limit),
            clients: client_breakdown(&records, limit),
            window,
        })
    }
}
