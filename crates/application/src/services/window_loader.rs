use crate::ports::QueryLogReader;
use fancy_regex::Regex;
use querystats_domain::{DomainError, QueryRecord, QueryWindow, StatusMapping};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Removes records whose domain matches a configured pattern.
#[derive(Debug, Clone, Default)]
pub struct DomainExclusion {
    pattern: Option<Regex>,
}

impl DomainExclusion {
    pub fn none() -> Self {
        Self { pattern: None }
    }

    /// Compiles `pattern`. A blank or invalid pattern disables exclusion.
    pub fn from_pattern(pattern: Option<&str>) -> Self {
        let Some(pattern) = pattern.map(str::trim).filter(|p| !p.is_empty()) else {
            return Self::none();
        };
        match Regex::new(pattern) {
            Ok(regex) => Self {
                pattern: Some(regex),
            },
            Err(e) => {
                warn!(pattern = %pattern, error = %e, "Invalid ignore pattern, domain exclusion disabled");
                Self::none()
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    pub fn excludes(&self, domain: &str) -> bool {
        match &self.pattern {
            Some(regex) => regex.is_match(domain).unwrap_or(false),
            None => false,
        }
    }
}

/// Normalised records for one window, with what was dropped on the way.
#[derive(Debug, Clone, Default)]
pub struct LoadedWindow {
    pub records: Vec<QueryRecord>,
    pub skipped: u64,
    pub excluded: u64,
}

/// Turns raw reader rows into validated [`QueryRecord`]s.
///
/// Malformed rows and rows with an unmapped status are skipped, never fatal.
/// Loads are serialised so only one snapshot is materialised at a time.
pub struct WindowLoader {
    reader: Arc<dyn QueryLogReader>,
    mapping: StatusMapping,
    exclusion: DomainExclusion,
    load_lock: Mutex<()>,
}

impl WindowLoader {
    pub fn new(
        reader: Arc<dyn QueryLogReader>,
        mapping: StatusMapping,
        exclusion: DomainExclusion,
    ) -> Self {
        Self {
            reader,
            mapping,
            exclusion,
            load_lock: Mutex::new(()),
        }
    }

    #[instrument(skip(self), fields(days = window.days, client = ?window.client))]
    pub async fn load(&self, window: &QueryWindow) -> Result<LoadedWindow, DomainError> {
        window.validate()?;

        let _lock = self.load_lock.lock().await;
        let rows = self.reader.read_window(window).await?;
        let fetched = rows.len();

        let mut loaded = LoadedWindow {
            records: Vec::with_capacity(fetched),
            ..Default::default()
        };

        for row in rows {
            let record = match row.into_record(&self.mapping) {
                Ok(record) => record,
                Err(e) => {
                    debug!(error = %e, "Skipping query log row");
                    loaded.skipped += 1;
                    continue;
                }
            };
            if let Some(client) = window.client.as_deref() {
                if &*record.client != client {
                    continue;
                }
            }
            if self.exclusion.excludes(&record.domain) {
                loaded.excluded += 1;
                continue;
            }
            loaded.records.push(record);
        }

        if loaded.skipped > 0 {
            warn!(
                skipped = loaded.skipped,
                fetched, "Skipped malformed query log rows"
            );
        }
        info!(
            records = loaded.records.len(),
            excluded = loaded.excluded,
            "Query window loaded"
        );

        Ok(loaded)
    }
}
