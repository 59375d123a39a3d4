use super::mean_duration;
use super::ranking::Tally;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, Timelike};
use querystats_domain::{DomainError, Elapsed, QueryRecord, Verdict};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeGranularity {
    Minute,
    QuarterHour,
    #[default]
    Hour,
    Day,
}

impl TimeGranularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeGranularity::Minute => "1m",
            TimeGranularity::QuarterHour => "15m",
            TimeGranularity::Hour => "1h",
            TimeGranularity::Day => "1d",
        }
    }

    pub fn step(&self) -> TimeDelta {
        match self {
            TimeGranularity::Minute => TimeDelta::minutes(1),
            TimeGranularity::QuarterHour => TimeDelta::minutes(15),
            TimeGranularity::Hour => TimeDelta::hours(1),
            TimeGranularity::Day => TimeDelta::days(1),
        }
    }

    /// Start of the bucket holding `timestamp`, on the local wall clock of
    /// its own offset.
    pub fn floor(&self, timestamp: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        let local = timestamp.naive_local();
        let minute = match self {
            TimeGranularity::Minute => local.minute(),
            TimeGranularity::QuarterHour => local.minute() - local.minute() % 15,
            TimeGranularity::Hour | TimeGranularity::Day => 0,
        };
        let hour = match self {
            TimeGranularity::Day => 0,
            _ => local.hour(),
        };
        let floored = local
            .date()
            .and_hms_opt(hour, minute, 0)
            .unwrap_or(local);
        timestamp - (local - floored)
    }
}

impl FromStr for TimeGranularity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" | "minute" => Ok(TimeGranularity::Minute),
            "15m" | "quarter_hour" => Ok(TimeGranularity::QuarterHour),
            "1h" | "hour" => Ok(TimeGranularity::Hour),
            "1d" | "day" => Ok(TimeGranularity::Day),
            other => Err(DomainError::InvalidGranularity(other.to_string())),
        }
    }
}

impl fmt::Display for TimeGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TimeGranularity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Every bucket start from the first to the last key.
///
/// Gaps are filled by stepping forward from each present key on the local
/// wall clock, stopping before the next key's local time. An offset change
/// between two keys therefore never yields a second bucket for the same
/// local period.
fn fill_buckets(
    keys: impl IntoIterator<Item = DateTime<FixedOffset>>,
    granularity: TimeGranularity,
) -> Vec<DateTime<FixedOffset>> {
    let step = granularity.step();
    let mut filled: Vec<DateTime<FixedOffset>> = Vec::new();
    for key in keys {
        if let Some(&previous) = filled.last() {
            let mut cursor = previous + step;
            while cursor.naive_local() < key.naive_local() {
                filled.push(cursor);
                cursor += step;
            }
        }
        filled.push(key);
    }
    filled
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineBucket {
    pub start: DateTime<FixedOffset>,
    pub allowed: u64,
    pub blocked: u64,
}

impl TimelineBucket {
    pub fn total(&self) -> u64 {
        self.allowed + self.blocked
    }
}

/// Allowed/blocked counts per bucket, zero-filled between the first and last
/// bucket that hold a record.
pub fn verdict_timeline(
    records: &[&QueryRecord],
    granularity: TimeGranularity,
) -> Vec<TimelineBucket> {
    let mut counts: BTreeMap<DateTime<FixedOffset>, (u64, u64)> = BTreeMap::new();
    for record in records {
        let slot = counts.entry(granularity.floor(record.timestamp)).or_default();
        match record.verdict {
            Verdict::Allowed => slot.0 += 1,
            Verdict::Blocked => slot.1 += 1,
        }
    }

    fill_buckets(counts.keys().copied(), granularity)
        .into_iter()
        .map(|start| {
            let (allowed, blocked) = counts.get(&start).copied().unwrap_or((0, 0));
            TimelineBucket {
                start,
                allowed,
                blocked,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientActivityBucket {
    pub start: DateTime<FixedOffset>,
    /// One count per entry of [`ClientActivity::clients`], same order.
    pub counts: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ClientActivity {
    pub clients: Vec<Arc<str>>,
    pub buckets: Vec<ClientActivityBucket>,
}

/// Per-bucket query counts for the `limit` busiest clients.
pub fn client_activity(
    records: &[&QueryRecord],
    granularity: TimeGranularity,
    limit: usize,
) -> ClientActivity {
    let totals: Tally<Arc<str>> = records.iter().map(|r| r.client.clone()).collect();
    let clients: Vec<Arc<str>> = totals
        .ranked(limit)
        .into_iter()
        .map(|(client, _)| client.clone())
        .collect();
    if clients.is_empty() {
        return ClientActivity::default();
    }

    let mut counts: BTreeMap<DateTime<FixedOffset>, Vec<u64>> = BTreeMap::new();
    for record in records {
        let start = granularity.floor(record.timestamp);
        let row = counts
            .entry(start)
            .or_insert_with(|| vec![0; clients.len()]);
        if let Some(column) = clients.iter().position(|c| *c == record.client) {
            row[column] += 1;
        }
    }

    let buckets = fill_buckets(counts.keys().copied(), granularity)
        .into_iter()
        .map(|start| ClientActivityBucket {
            start,
            counts: counts
                .get(&start)
                .cloned()
                .unwrap_or_else(|| vec![0; clients.len()]),
        })
        .collect();

    ClientActivity { clients, buckets }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyReplyTime {
    pub date: NaiveDate,
    pub average_reply_time: Elapsed,
    pub samples: u64,
}

/// Mean reply time per calendar date. Dates without a sample are left out.
pub fn daily_reply_times(records: &[&QueryRecord]) -> Vec<DailyReplyTime> {
    let mut per_day: BTreeMap<NaiveDate, Vec<Duration>> = BTreeMap::new();
    for record in records {
        if let Some(reply_time) = record.reply_time {
            per_day.entry(record.date()).or_default().push(reply_time);
        }
    }

    per_day
        .into_iter()
        .filter_map(|(date, samples)| {
            let average = mean_duration(samples.iter().copied())?;
            Some(DailyReplyTime {
                date,
                average_reply_time: Elapsed(average),
                samples: samples.len() as u64,
            })
        })
        .collect()
}
