mod errors;
mod logging;
mod root;
mod server;
mod source;
mod stats;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use source::SourceConfig;
pub use stats::StatsConfig;
