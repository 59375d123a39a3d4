use crate::services::WindowLoader;
use crate::stats::MetricsEngine;
use querystats_domain::{DomainError, MetricsResult, QueryWindow};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub window: QueryWindow,
    pub skipped: u64,
    pub excluded: u64,
    pub metrics: MetricsResult,
}

pub struct GetMetricsUseCase {
    loader: Arc<WindowLoader>,
    engine: MetricsEngine,
}

impl GetMetricsUseCase {
    pub fn new(loader: Arc<WindowLoader>, engine: MetricsEngine) -> Self {
        Self { loader, engine }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, window: QueryWindow) -> Result<MetricsReport, DomainError> {
        let loaded = self.loader.load(&window).await?;
        let metrics = self.engine.compute(&loaded.records);
        debug!(total = metrics.total_queries, "Metrics computed");

        Ok(MetricsReport {
            window,
            skipped: loaded.skipped,
            excluded: loaded.excluded,
            metrics,
        })
    }
}
