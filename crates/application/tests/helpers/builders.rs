use chrono::{DateTime, FixedOffset, TimeDelta};
use querystats_domain::{QueryRecord, RawQueryRow, Verdict};
use std::time::Duration;

/// Monday 2024-01-01 12:00 UTC.
pub const BASE: &str = "2024-01-01T12:00:00+00:00";

pub fn ts(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

pub fn at(seconds: i64) -> DateTime<FixedOffset> {
    ts(BASE) + TimeDelta::seconds(seconds)
}

pub fn allowed(timestamp: DateTime<FixedOffset>, domain: &str, client: &str) -> QueryRecord {
    QueryRecord::new(timestamp, domain, client, Verdict::Allowed)
}

pub fn blocked(timestamp: DateTime<FixedOffset>, domain: &str, client: &str) -> QueryRecord {
    QueryRecord::new(timestamp, domain, client, Verdict::Blocked)
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// `verdicts` laid out one second apart starting at [`BASE`].
pub fn sequence(verdicts: &[Verdict]) -> Vec<QueryRecord> {
    verdicts
        .iter()
        .enumerate()
        .map(|(i, &verdict)| QueryRecord::new(at(i as i64), "example.com", "10.0.0.1", verdict))
        .collect()
}

pub fn runs(parts: &[(Verdict, usize)]) -> Vec<Verdict> {
    parts
        .iter()
        .flat_map(|&(verdict, n)| std::iter::repeat_n(verdict, n))
        .collect()
}

pub struct RawRowBuilder {
    row: RawQueryRow,
}

impl RawRowBuilder {
    /// A complete, allowed (FTL status 2) row at [`BASE`].
    pub fn new() -> Self {
        Self {
            row: RawQueryRow {
                timestamp: Some(ts(BASE)),
                domain: Some("example.com".to_string()),
                client: Some("10.0.0.1".to_string()),
                status: Some(2),
                reply_time: None,
            },
        }
    }

    pub fn at(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.row.timestamp = Some(timestamp);
        self
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.row.domain = Some(domain.to_string());
        self
    }

    pub fn client(mut self, client: &str) -> Self {
        self.row.client = Some(client.to_string());
        self
    }

    pub fn status(mut self, status: i64) -> Self {
        self.row.status = Some(status);
        self
    }

    pub fn reply_time(mut self, seconds: f64) -> Self {
        self.row.reply_time = Some(seconds);
        self
    }

    pub fn without_timestamp(mut self) -> Self {
        self.row.timestamp = None;
        self
    }

    pub fn without_domain(mut self) -> Self {
        self.row.domain = None;
        self
    }

    pub fn without_status(mut self) -> Self {
        self.row.status = None;
        self
    }

    pub fn build(self) -> RawQueryRow {
        self.row
    }
}

impl Default for RawRowBuilder {
    fn default() -> Self {
        Self::new()
    }
}
