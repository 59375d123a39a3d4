use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::source::SourceConfig;
use super::stats::StatsConfig;

const LOCAL_CONFIG_PATH: &str = "querystats.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/querystats/config.toml";

/// Main configuration structure for querystats
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Where query logs are read from and which window to load
    #[serde(default)]
    pub source: SourceConfig,

    /// Metrics engine parameters
    #[serde(default)]
    pub stats: StatsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. querystats.toml in current directory
    /// 3. /etc/querystats/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(paths) = overrides.database_paths.filter(|p| !p.is_empty()) {
            self.source.database_paths = paths;
        }
        if let Some(days) = overrides.days {
            self.source.days = days;
        }
        if let Some(start) = overrides.start_date {
            self.source.start_date = Some(start);
        }
        if let Some(end) = overrides.end_date {
            self.source.end_date = Some(end);
        }
        if let Some(tz) = overrides.timezone {
            self.source.timezone = tz;
        }
        if let Some(pattern) = overrides.ignore_domains {
            self.stats.ignore_domains = Some(pattern);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Server port cannot be 0".to_string()));
        }

        if self.source.database_paths.is_empty() {
            return Err(ConfigError::Validation(
                "No query log databases configured".to_string(),
            ));
        }

        self.source.window()?;
        self.stats.boundary()?;
        self.stats.status_mapping()?;

        if self.stats.top_limit == 0 {
            return Err(ConfigError::Validation(
                "top_limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_paths: Option<Vec<String>>,
    pub days: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub timezone: Option<String>,
    pub ignore_domains: Option<String>,
    pub log_level: Option<String>,
}
