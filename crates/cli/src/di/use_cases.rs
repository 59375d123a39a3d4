use super::Repositories;
use querystats_application::services::{DomainExclusion, WindowLoader};
use querystats_application::stats::MetricsEngine;
use querystats_application::use_cases::{
    GetMetricsUseCase, GetTimelineUseCase, GetTopEntriesUseCase,
};
use querystats_domain::{Config, ConfigError};
use std::sync::Arc;

pub struct UseCases {
    pub get_metrics: Arc<GetMetricsUseCase>,
    pub get_timeline: Arc<GetTimelineUseCase>,
    pub get_top_entries: Arc<GetTopEntriesUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories) -> Result<Self, ConfigError> {
        let loader = Arc::new(WindowLoader::new(
            repos.query_log.clone(),
            config.stats.status_mapping()?,
            DomainExclusion::from_pattern(config.stats.ignore_domains.as_deref()),
        ));
        let engine = MetricsEngine::new(config.stats.boundary()?);

        Ok(Self {
            get_metrics: Arc::new(GetMetricsUseCase::new(loader.clone(), engine)),
            get_timeline: Arc::new(GetTimelineUseCase::new(
                loader.clone(),
                config.stats.top_clients,
            )),
            get_top_entries: Arc::new(GetTopEntriesUseCase::new(loader)),
        })
    }
}
