#![allow(dead_code)]
use chrono::{DateTime, FixedOffset};
use querystats_domain::RawQueryRow;

pub fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

pub struct RawRowBuilder {
    row: RawQueryRow,
}

impl RawRowBuilder {
    pub fn new() -> Self {
        Self {
            row: RawQueryRow {
                timestamp: Some(ts("2024-01-01T12:00:00+00:00")),
                domain: Some("example.com".to_string()),
                client: Some("192.168.1.10".to_string()),
                status: Some(2),
                reply_time: Some(0.002),
            },
        }
    }

    pub fn timestamp(mut self, timestamp: Option<DateTime<FixedOffset>>) -> Self {
        self.row.timestamp = timestamp;
        self
    }

    pub fn domain(mut self, domain: Option<&str>) -> Self {
        self.row.domain = domain.map(str::to_string);
        self
    }

    pub fn client(mut self, client: Option<&str>) -> Self {
        self.row.client = client.map(str::to_string);
        self
    }

    pub fn status(mut self, status: Option<i64>) -> Self {
        self.row.status = status;
        self
    }

    pub fn reply_time(mut self, reply_time: Option<f64>) -> Self {
        self.row.reply_time = reply_time;
        self
    }

    pub fn build(self) -> RawQueryRow {
        self.row
    }
}
