pub mod queries;

pub use queries::{
    GetMetricsUseCase, GetTimelineUseCase, GetTopEntriesUseCase, MetricsReport, TimelineReport,
    TopEntries,
};
