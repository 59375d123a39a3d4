use super::errors::ConfigError;
use crate::query_window::QueryWindow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Pi-hole FTL databases to read; rows from all of them are merged.
    #[serde(default = "default_database_paths")]
    pub database_paths: Vec<String>,

    #[serde(default = "default_days")]
    pub days: u32,

    /// First day to include (`YYYY-MM-DD`).
    #[serde(default)]
    pub start_date: Option<String>,

    /// Last day to include (`YYYY-MM-DD`), inclusive.
    #[serde(default)]
    pub end_date: Option<String>,

    /// IANA zone used for dates, hours and weekdays. Unknown zones fall back to UTC.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl SourceConfig {
    pub fn window(&self) -> Result<QueryWindow, ConfigError> {
        let start_date = parse_optional_date(self.start_date.as_deref())?;
        let end_date = parse_optional_date(self.end_date.as_deref())?;
        let window = QueryWindow::last_days(self.days).between(start_date, end_date);
        window
            .validate()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        Ok(window)
    }
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<chrono::NaiveDate>, ConfigError> {
    value
        .map(|v| QueryWindow::parse_date(v).map_err(|e| ConfigError::Validation(e.to_string())))
        .transpose()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            database_paths: default_database_paths(),
            days: default_days(),
            start_date: None,
            end_date: None,
            timezone: default_timezone(),
        }
    }
}

fn default_database_paths() -> Vec<String> {
    vec!["pihole-FTL.db".to_string()]
}

fn default_days() -> u32 {
    365
}

fn default_timezone() -> String {
    "UTC".to_string()
}
