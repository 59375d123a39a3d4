use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Serialize, Serializer};
use std::sync::Arc;
use std::time::Duration;

/// Serialized form of [`Metric::NoData`].
pub const NO_DATA: &str = "no data";

/// Metric keys every [`MetricsResult`] exposes to presenters.
pub const METRIC_KEYS: [&str; 27] = [
    "total_queries",
    "allowed_count",
    "blocked_count",
    "unique_clients",
    "top_allowed_domain",
    "top_blocked_domain",
    "average_reply_time",
    "peak_day",
    "trough_day",
    "most_active_hour",
    "least_active_hour",
    "most_active_weekday",
    "least_active_weekday",
    "longest_blocking_streak",
    "longest_allowing_streak",
    "day_total",
    "night_total",
    "day_top_allowed",
    "day_top_blocked",
    "night_top_allowed",
    "night_top_blocked",
    "most_persistent_client",
    "most_diverse_client",
    "longest_idle_period",
    "slowest_responding_domain",
    "avg_time_between_blocked",
    "avg_time_between_allowed",
];

/// A metric value, or the explicit absence of one.
///
/// `NoData` is kept apart from zero and empty values so presenters can tell
/// "nothing to measure" from "measured zero".
#[derive(Debug, Clone, PartialEq)]
pub enum Metric<T> {
    Value(T),
    NoData,
}

impl<T> Metric<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Metric::Value(v) => Some(v),
            Metric::NoData => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Metric::Value(v) => Some(v),
            Metric::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Metric::NoData)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Metric<U> {
        match self {
            Metric::Value(v) => Metric::Value(f(v)),
            Metric::NoData => Metric::NoData,
        }
    }
}

impl<T> From<Option<T>> for Metric<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Metric::Value(v),
            None => Metric::NoData,
        }
    }
}

impl<T: Serialize> Serialize for Metric<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Metric::Value(v) => v.serialize(serializer),
            Metric::NoData => serializer.serialize_str(NO_DATA),
        }
    }
}

/// Non-negative duration, serialized as fractional milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Elapsed(pub Duration);

impl Elapsed {
    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn as_millis_f64(&self) -> f64 {
        self.0.as_secs_f64() * 1000.0
    }
}

impl From<Duration> for Elapsed {
    fn from(value: Duration) -> Self {
        Self(value)
    }
}

impl Serialize for Elapsed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = (self.as_millis_f64() * 1000.0).round() / 1000.0;
        serializer.serialize_f64(millis)
    }
}

/// A name (domain or client) with the count that ranked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub name: Arc<str>,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(name: impl Into<Arc<str>>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Longest run of consecutive same-verdict records.
///
/// A verdict that never occurs has length 0 and no bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub length: u64,
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
}

impl Streak {
    pub fn empty() -> Self {
        Self {
            length: 0,
            start: None,
            end: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl Default for Streak {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdlePeriod {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub duration: Elapsed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlowestDomain {
    pub domain: Arc<str>,
    pub average_reply_time: Elapsed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockedAttempt {
    pub client: Arc<str>,
    pub domain: Arc<str>,
    pub count: u64,
}

/// The engine's output for one window. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsResult {
    pub total_queries: u64,
    pub allowed_count: u64,
    pub blocked_count: u64,
    pub allowed_pct: f64,
    pub blocked_pct: f64,
    pub unique_clients: u64,
    pub unique_domains: u64,

    pub top_allowed_domain: Metric<RankedEntry>,
    pub top_blocked_domain: Metric<RankedEntry>,
    pub top_allowed_domain_client: Metric<RankedEntry>,
    pub top_blocked_domain_client: Metric<RankedEntry>,
    pub top_client: Metric<RankedEntry>,
    pub top_allowed_client: Metric<RankedEntry>,
    pub top_blocked_client: Metric<RankedEntry>,
    pub most_persistent_client: Metric<RankedEntry>,
    pub most_diverse_client: Metric<RankedEntry>,
    pub most_repeated_blocked_attempt: Metric<BlockedAttempt>,

    pub average_reply_time: Metric<Elapsed>,
    pub min_reply_time: Metric<Elapsed>,
    pub max_reply_time: Metric<Elapsed>,
    pub slowest_responding_domain: Metric<SlowestDomain>,

    pub first_query: Metric<DateTime<FixedOffset>>,
    pub last_query: Metric<DateTime<FixedOffset>>,
    pub data_span: Metric<Elapsed>,

    pub peak_day: Metric<NaiveDate>,
    pub trough_day: Metric<NaiveDate>,
    pub peak_allowed_day: Metric<NaiveDate>,
    pub trough_allowed_day: Metric<NaiveDate>,
    pub peak_blocked_day: Metric<NaiveDate>,
    pub trough_blocked_day: Metric<NaiveDate>,
    pub most_active_hour: Metric<u32>,
    pub most_active_hour_count: u64,
    pub least_active_hour: Metric<u32>,
    pub least_active_hour_count: u64,
    pub most_active_weekday: Metric<String>,
    pub least_active_weekday: Metric<String>,

    pub longest_blocking_streak: Streak,
    pub longest_allowing_streak: Streak,
    pub longest_idle_period: Metric<IdlePeriod>,
    pub avg_time_between_blocked: Metric<Elapsed>,
    pub avg_time_between_allowed: Metric<Elapsed>,

    pub day_total: u64,
    pub night_total: u64,
    pub day_top_allowed: Metric<RankedEntry>,
    pub day_top_blocked: Metric<RankedEntry>,
    pub day_top_client: Metric<RankedEntry>,
    pub night_top_allowed: Metric<RankedEntry>,
    pub night_top_blocked: Metric<RankedEntry>,
    pub night_top_client: Metric<RankedEntry>,
}
