use super::errors::ConfigError;
use crate::partition::{DayNightBoundary, DEFAULT_DAY_END_HOUR, DEFAULT_DAY_START_HOUR};
use crate::status_mapping::{StatusMapping, FTL_ALLOWED_STATUSES, FTL_BLOCKED_STATUSES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsConfig {
    #[serde(default = "default_day_start_hour")]
    pub day_start_hour: u32,

    #[serde(default = "default_day_end_hour")]
    pub day_end_hour: u32,

    /// Regex of domains to drop before any metric is computed.
    #[serde(default)]
    pub ignore_domains: Option<String>,

    /// Length of the top domain / client lists.
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,

    /// Number of clients tracked in the client activity timeline.
    #[serde(default = "default_top_clients")]
    pub top_clients: usize,

    #[serde(default = "default_allowed_statuses")]
    pub allowed_statuses: Vec<i64>,

    #[serde(default = "default_blocked_statuses")]
    pub blocked_statuses: Vec<i64>,
}

impl StatsConfig {
    pub fn boundary(&self) -> Result<DayNightBoundary, ConfigError> {
        DayNightBoundary::new(self.day_start_hour, self.day_end_hour)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    pub fn status_mapping(&self) -> Result<StatusMapping, ConfigError> {
        StatusMapping::new(&self.allowed_statuses, &self.blocked_statuses)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            day_start_hour: default_day_start_hour(),
            day_end_hour: default_day_end_hour(),
            ignore_domains: None,
            top_limit: default_top_limit(),
            top_clients: default_top_clients(),
            allowed_statuses: default_allowed_statuses(),
            blocked_statuses: default_blocked_statuses(),
        }
    }
}

fn default_day_start_hour() -> u32 {
    DEFAULT_DAY_START_HOUR
}

fn default_day_end_hour() -> u32 {
    DEFAULT_DAY_END_HOUR
}

fn default_top_limit() -> usize {
    10
}

fn default_top_clients() -> usize {
    10
}

fn default_allowed_statuses() -> Vec<i64> {
    FTL_ALLOWED_STATUSES.to_vec()
}

fn default_blocked_statuses() -> Vec<i64> {
    FTL_BLOCKED_STATUSES.to_vec()
}
