use querystats_application::use_cases::{
    GetMetricsUseCase, GetTimelineUseCase, GetTopEntriesUseCase,
};
use querystats_domain::QueryWindow;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_metrics: Arc<GetMetricsUseCase>,
    pub get_timeline: Arc<GetTimelineUseCase>,
    pub get_top_entries: Arc<GetTopEntriesUseCase>,
    /// Window used for any parameter a request leaves out.
    pub default_window: Arc<QueryWindow>,
    pub default_limit: usize,
}
