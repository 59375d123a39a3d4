//! Querystats Domain Layer
pub mod config;
pub mod errors;
pub mod metrics;
pub mod partition;
pub mod query_record;
pub mod query_window;
pub mod status_mapping;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use metrics::{
    BlockedAttempt, Elapsed, IdlePeriod, Metric, MetricsResult, RankedEntry, SlowestDomain,
    Streak, METRIC_KEYS, NO_DATA,
};
pub use partition::{DayNightBoundary, DayPeriod};
pub use query_record::{QueryRecord, RawQueryRow, Verdict};
pub use query_window::QueryWindow;
pub use status_mapping::StatusMapping;
