use serde::Deserialize;

/// Query-string parameters shared by the metrics, timeline and top routes.
/// Anything left out falls back to the configured window.
#[derive(Deserialize, Debug, Default)]
pub struct StatsQuery {
    pub days: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub client: Option<String>,
    #[serde(default = "default_granularity")]
    pub granularity: String,
    pub limit: Option<usize>,
}

fn default_granularity() -> String {
    "1h".to_string()
}
