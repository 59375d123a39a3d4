pub mod get_metrics;
pub mod get_timeline;
pub mod get_top_entries;

pub use get_metrics::{GetMetricsUseCase, MetricsReport};
pub use get_timeline::{GetTimelineUseCase, TimelineReport};
pub use get_top_entries::{GetTopEntriesUseCase, TopEntries, MAX_TOP_LIMIT};
