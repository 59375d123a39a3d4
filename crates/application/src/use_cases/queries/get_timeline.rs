use crate::services::WindowLoader;
use crate::stats::{
    temporal::sort_chronologically,
    timeline::{client_activity, daily_reply_times, verdict_timeline},
    ClientActivity, DailyReplyTime, TimeGranularity, TimelineBucket,
};
use querystats_domain::{DomainError, QueryWindow};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Clone, Serialize)]
pub struct TimelineReport {
    pub window: QueryWindow,
    pub granularity: TimeGranularity,
    pub verdicts: Vec<TimelineBucket>,
    pub clients: ClientActivity,
    pub reply_times: Vec<DailyReplyTime>,
}

pub struct GetTimelineUseCase {
    loader: Arc<WindowLoader>,
    top_clients: usize,
}

impl GetTimelineUseCase {
    pub fn new(loader: Arc<WindowLoader>, top_clients: usize) -> Self {
        Self {
            loader,
            top_clients,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        window: QueryWindow,
        granularity: TimeGranularity,
    ) -> Result<TimelineReport, DomainError> {
        let loaded = self.loader.load(&window).await?;
        let records = sort_chronologically(&loaded.records);

        Ok(TimelineReport {
            verdicts: verdict_timeline(&records, granularity),
            clients: client_activity(&records, granularity, self.top_clients),
            reply_times: daily_reply_times(&records),
            window,
            granularity,
        })
    }
}
