use super::mean_duration;
use super::ranking::Tally;
use chrono::{DateTime, FixedOffset, NaiveDate, Weekday};
use querystats_domain::{
    Elapsed, IdlePeriod, QueryRecord, SlowestDomain, Streak, Verdict,
};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::time::Duration;

/// Stable chronological ordering. Records sharing a timestamp keep their
/// input order, so tie-breaks stay deterministic.
pub fn sort_chronologically(records: &[QueryRecord]) -> Vec<&QueryRecord> {
    let mut sorted: Vec<&QueryRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.timestamp);
    sorted
}

fn gap(from: &DateTime<FixedOffset>, to: &DateTime<FixedOffset>) -> Duration {
    (*to - *from).to_std().unwrap_or(Duration::ZERO)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extremes<T> {
    pub most: Option<(T, u64)>,
    pub least: Option<(T, u64)>,
}

fn extremes<T: std::hash::Hash + Eq + Clone>(tally: &Tally<T>) -> Extremes<T> {
    Extremes {
        most: tally.top().map(|(k, c)| (k.clone(), c)),
        least: tally.bottom().map(|(k, c)| (k.clone(), c)),
    }
}

/// Busiest and quietest calendar dates, optionally for one verdict only.
///
/// Only dates with at least one query compete for the trough.
pub fn day_extremes(records: &[&QueryRecord], verdict: Option<Verdict>) -> Extremes<NaiveDate> {
    let tally: Tally<NaiveDate> = records
        .iter()
        .filter(|r| verdict.is_none_or(|v| r.verdict == v))
        .map(|r| r.date())
        .collect();
    extremes(&tally)
}

/// Busiest and quietest hour of day (0-23) across the whole window.
pub fn hour_extremes(records: &[&QueryRecord]) -> Extremes<u32> {
    let tally: Tally<u32> = records.iter().map(|r| r.hour()).collect();
    extremes(&tally)
}

pub fn weekday_extremes(records: &[&QueryRecord]) -> Extremes<Weekday> {
    let tally: Tally<Weekday> = records.iter().map(|r| r.weekday()).collect();
    extremes(&tally)
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A maximal run of consecutive same-verdict records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub verdict: Verdict,
    pub length: u64,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

/// Splits a chronological sequence into verdict runs. Adjacency is by
/// position in the stream, not by time gap.
pub fn verdict_runs(records: &[&QueryRecord]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for record in records {
        match runs.last_mut() {
            Some(run) if run.verdict == record.verdict => {
                run.length += 1;
                run.end = record.timestamp;
            }
            _ => runs.push(Run {
                verdict: record.verdict,
                length: 1,
                start: record.timestamp,
                end: record.timestamp,
            }),
        }
    }
    runs
}

/// Longest run for `verdict`; the earliest one wins a tie.
pub fn longest_streak(runs: &[Run], verdict: Verdict) -> Streak {
    let mut best: Option<&Run> = None;
    for run in runs.iter().filter(|r| r.verdict == verdict) {
        if best.is_none_or(|b| run.length > b.length) {
            best = Some(run);
        }
    }
    best.map_or_else(Streak::empty, |run| Streak {
        length: run.length,
        start: Some(run.start),
        end: Some(run.end),
    })
}

/// Largest gap between two temporally consecutive records, regardless of verdict.
pub fn longest_idle_period(records: &[&QueryRecord]) -> Option<IdlePeriod> {
    let mut best: Option<IdlePeriod> = None;
    for pair in records.windows(2) {
        let duration = gap(&pair[0].timestamp, &pair[1].timestamp);
        if best.as_ref().is_none_or(|b| duration > b.duration.0) {
            best = Some(IdlePeriod {
                start: pair[0].timestamp,
                end: pair[1].timestamp,
                duration: Elapsed(duration),
            });
        }
    }
    best
}

/// Mean gap between consecutive records of one verdict. Records of the other
/// verdict in between are skipped over, not treated as boundaries.
pub fn average_gap(records: &[&QueryRecord], verdict: Verdict) -> Option<Duration> {
    let filtered: Vec<&QueryRecord> = records
        .iter()
        .copied()
        .filter(|r| r.verdict == verdict)
        .collect();
    mean_duration(
        filtered
            .windows(2)
            .map(|pair| gap(&pair[0].timestamp, &pair[1].timestamp)),
    )
}

/// Domain with the highest mean reply time. Domains without a single reply
/// time sample are not considered.
pub fn slowest_domain(records: &[&QueryRecord]) -> Option<SlowestDomain> {
    let mut order: Vec<Arc<str>> = Vec::new();
    let mut samples: FxHashMap<Arc<str>, (u128, u128)> = FxHashMap::default();
    for record in records {
        let Some(reply_time) = record.reply_time else {
            continue;
        };
        let entry = samples.entry(record.domain.clone()).or_insert_with(|| {
            order.push(record.domain.clone());
            (0, 0)
        });
        entry.0 += reply_time.as_nanos();
        entry.1 += 1;
    }

    let mut best: Option<SlowestDomain> = None;
    for domain in order {
        let (sum, n) = samples[&domain];
        let average = Duration::from_nanos((sum / n) as u64);
        if best
            .as_ref()
            .is_none_or(|b| average > b.average_reply_time.0)
        {
            best = Some(SlowestDomain {
                domain,
                average_reply_time: Elapsed(average),
            });
        }
    }
    best
}
