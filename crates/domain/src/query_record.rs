use crate::errors::DomainError;
use crate::status_mapping::StatusMapping;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Binary classification of a DNS query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Allowed,
    Blocked,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Allowed => "allowed",
            Verdict::Blocked => "blocked",
        }
    }

    pub fn is_blocked(self) -> bool {
        self == Verdict::Blocked
    }

    pub fn is_allowed(self) -> bool {
        self == Verdict::Allowed
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One DNS query event, already validated and classified.
///
/// `timestamp` carries the offset of the zone the loader converted it into, so
/// calendar date, hour and weekday are all local to that zone.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRecord {
    pub timestamp: DateTime<FixedOffset>,
    pub domain: Arc<str>,
    pub client: Arc<str>,
    pub verdict: Verdict,
    pub reply_time: Option<Duration>,
}

impl QueryRecord {
    pub fn new(
        timestamp: DateTime<FixedOffset>,
        domain: impl Into<Arc<str>>,
        client: impl Into<Arc<str>>,
        verdict: Verdict,
    ) -> Self {
        Self {
            timestamp,
            domain: domain.into(),
            client: client.into(),
            verdict,
            reply_time: None,
        }
    }

    pub fn with_reply_time(mut self, reply_time: Duration) -> Self {
        self.reply_time = Some(reply_time);
        self
    }

    pub fn is_blocked(&self) -> bool {
        self.verdict.is_blocked()
    }

    pub fn is_allowed(&self) -> bool {
        self.verdict.is_allowed()
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }
}

/// A row as it comes out of the log store, before any validation.
///
/// `reply_time` is expressed in seconds, as stored by Pi-hole FTL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawQueryRow {
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub domain: Option<String>,
    pub client: Option<String>,
    pub status: Option<i64>,
    pub reply_time: Option<f64>,
}

impl RawQueryRow {
    /// Validates the row and collapses its raw status into a [`Verdict`].
    ///
    /// A missing required field yields `MalformedRecord`, an unmapped status
    /// yields `InvalidVerdict`. A negative or non-finite reply time is dropped
    /// and the record kept.
    pub fn into_record(self, mapping: &StatusMapping) -> Result<QueryRecord, DomainError> {
        let timestamp = self
            .timestamp
            .ok_or_else(|| DomainError::MalformedRecord("missing timestamp".to_string()))?;
        let domain = required_text(self.domain, "domain")?;
        let client = required_text(self.client, "client")?;
        let status = self
            .status
            .ok_or_else(|| DomainError::MalformedRecord("missing status".to_string()))?;
        let verdict = mapping
            .verdict_for(status)
            .ok_or(DomainError::InvalidVerdict(status))?;

        Ok(QueryRecord {
            timestamp,
            domain: Arc::from(domain.as_str()),
            client: Arc::from(client.as_str()),
            verdict,
            reply_time: self
                .reply_time
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok()),
        })
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String, DomainError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(DomainError::MalformedRecord(format!("empty {field}"))),
        None => Err(DomainError::MalformedRecord(format!("missing {field}"))),
    }
}
