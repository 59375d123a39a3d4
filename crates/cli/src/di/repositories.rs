use querystats_domain::Config;
use querystats_infrastructure::repositories::FtlQueryLogReader;
use querystats_infrastructure::time_zone::resolve_timezone;
use std::sync::Arc;

pub struct Repositories {
    pub query_log: Arc<FtlQueryLogReader>,
}

impl Repositories {
    pub async fn new(config: &Config) -> Result<Self, querystats_domain::DomainError> {
        let timezone = resolve_timezone(&config.source.timezone);
        let query_log = FtlQueryLogReader::open(&config.source.database_paths, timezone).await?;
        Ok(Self {
            query_log: Arc::new(query_log),
        })
    }
}
