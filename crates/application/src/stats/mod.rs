//! The metrics engine: pure functions from a snapshot of query records to a
//! [`MetricsResult`]. Nothing here logs, locks or keeps state between calls.

pub mod aggregates;
pub mod partition;
pub mod ranking;
pub mod temporal;
pub mod timeline;

pub use aggregates::{ClientBreakdown, QueryCounts, ReplyTimeSummary};
pub use partition::PartitionSummary;
pub use ranking::{rank_order, Tally};
pub use temporal::{Extremes, Run};
pub use timeline::{
    ClientActivity, ClientActivityBucket, DailyReplyTime, TimeGranularity, TimelineBucket,
};

use querystats_domain::{
    DayNightBoundary, Elapsed, MetricsResult, QueryRecord, Verdict,
};
use std::time::Duration;

/// Arithmetic mean, or `None` for an empty sequence.
pub(crate) fn mean_duration(samples: impl Iterator<Item = Duration>) -> Option<Duration> {
    let (sum, n) = samples.fold((0u128, 0u128), |(sum, n), d| (sum + d.as_nanos(), n + 1));
    if n == 0 {
        return None;
    }
    Some(Duration::from_nanos((sum / n) as u64))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsEngine {
    boundary: DayNightBoundary,
}

impl MetricsEngine {
    pub fn new(boundary: DayNightBoundary) -> Self {
        Self { boundary }
    }

    pub fn boundary(&self) -> &DayNightBoundary {
        &self.boundary
    }

    /// Computes every metric over `records`. Input order does not matter:
    /// records are sorted (stably) before any temporal analysis, and an empty
    /// slice yields zero counts and `NoData` everywhere else.
    pub fn compute(&self, records: &[QueryRecord]) -> MetricsResult {
        let sorted = temporal::sort_chronologically(records);
        let records = sorted.as_slice();

        let counts = aggregates::query_counts(records);
        let top_allowed_domain = aggregates::top_domain(records, Verdict::Allowed);
        let top_blocked_domain = aggregates::top_domain(records, Verdict::Blocked);
        let top_allowed_domain_client = top_allowed_domain.as_ref().and_then(|top| {
            aggregates::top_domain_client(records, Verdict::Allowed, &top.name)
        });
        let top_blocked_domain_client = top_blocked_domain.as_ref().and_then(|top| {
            aggregates::top_domain_client(records, Verdict::Blocked, &top.name)
        });
        let reply_times = aggregates::reply_time_summary(records);

        let first_query = records.first().map(|r| r.timestamp);
        let last_query = records.last().map(|r| r.timestamp);
        let data_span = first_query.zip(last_query).map(|(first, last)| {
            Elapsed((last - first).to_std().unwrap_or(Duration::ZERO))
        });

        let days = temporal::day_extremes(records, None);
        let allowed_days = temporal::day_extremes(records, Some(Verdict::Allowed));
        let blocked_days = temporal::day_extremes(records, Some(Verdict::Blocked));
        let hours = temporal::hour_extremes(records);
        let weekdays = temporal::weekday_extremes(records);

        let runs = temporal::verdict_runs(records);
        let (day, night) = partition::summarize_day_night(records, &self.boundary);

        MetricsResult {
            total_queries: counts.total,
            allowed_count: counts.allowed,
            blocked_count: counts.blocked,
            allowed_pct: counts.allowed_pct(),
            blocked_pct: counts.blocked_pct(),
            unique_clients: aggregates::unique_clients(records),
            unique_domains: aggregates::unique_domains(records),

            top_allowed_domain: top_allowed_domain.into(),
            top_blocked_domain: top_blocked_domain.into(),
            top_allowed_domain_client: top_allowed_domain_client.into(),
            top_blocked_domain_client: top_blocked_domain_client.into(),
            top_client: aggregates::top_client(records, None).into(),
            top_allowed_client: aggregates::top_client(records, Some(Verdict::Allowed)).into(),
            top_blocked_client: aggregates::top_client(records, Some(Verdict::Blocked)).into(),
            most_persistent_client: aggregates::most_persistent_client(records).into(),
            most_diverse_client: aggregates::most_diverse_client(records).into(),
            most_repeated_blocked_attempt: aggregates::most_repeated_blocked_attempt(records)
                .into(),

            average_reply_time: reply_times.average.map(Elapsed).into(),
            min_reply_time: reply_times.min.map(Elapsed).into(),
            max_reply_time: reply_times.max.map(Elapsed).into(),
            slowest_responding_domain: temporal::slowest_domain(records).into(),

            first_query: first_query.into(),
            last_query: last_query.into(),
            data_span: data_span.into(),

            peak_day: days.most.map(|(date, _)| date).into(),
            trough_day: days.least.map(|(date, _)| date).into(),
            peak_allowed_day: allowed_days.most.map(|(date, _)| date).into(),
            trough_allowed_day: allowed_days.least.map(|(date, _)| date).into(),
            peak_blocked_day: blocked_days.most.map(|(date, _)| date).into(),
            trough_blocked_day: blocked_days.least.map(|(date, _)| date).into(),
            most_active_hour: hours.most.map(|(hour, _)| hour).into(),
            most_active_hour_count: hours.most.map_or(0, |(_, count)| count),
            least_active_hour: hours.least.map(|(hour, _)| hour).into(),
            least_active_hour_count: hours.least.map_or(0, |(_, count)| count),
            most_active_weekday: weekdays
                .most
                .map(|(weekday, _)| temporal::weekday_name(weekday).to_string())
                .into(),
            least_active_weekday: weekdays
                .least
                .map(|(weekday, _)| temporal::weekday_name(weekday).to_string())
                .into(),

            longest_blocking_streak: temporal::longest_streak(&runs, Verdict::Blocked),
            longest_allowing_streak: temporal::longest_streak(&runs, Verdict::Allowed),
            longest_idle_period: temporal::longest_idle_period(records).into(),
            avg_time_between_blocked: temporal::average_gap(records, Verdict::Blocked)
                .map(Elapsed)
                .into(),
            avg_time_between_allowed: temporal::average_gap(records, Verdict::Allowed)
                .map(Elapsed)
                .into(),

            day_total: day.total,
            night_total: night.total,
            day_top_allowed: day.top_allowed.into(),
            day_top_blocked: day.top_blocked.into(),
            day_top_client: day.top_client.into(),
            night_top_allowed: night.top_allowed.into(),
            night_top_blocked: night.top_blocked.into(),
            night_top_client: night.top_client.into(),
        }
    }

    /// The chronological view [`compute`](Self::compute) works on, for the
    /// timeline and top-list helpers.
    pub fn sorted<'a>(&self, records: &'a [QueryRecord]) -> Vec<&'a QueryRecord> {
        temporal::sort_chronologically(records)
    }
}
