use super::mean_duration;
use super::ranking::Tally;
use querystats_domain::{BlockedAttempt, QueryRecord, RankedEntry, Verdict};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryCounts {
    pub total: u64,
    pub allowed: u64,
    pub blocked: u64,
}

impl QueryCounts {
    pub fn allowed_pct(&self) -> f64 {
        percentage(self.allowed, self.total)
    }

    pub fn blocked_pct(&self) -> f64 {
        percentage(self.blocked, self.total)
    }
}

fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

pub fn query_counts(records: &[&QueryRecord]) -> QueryCounts {
    let blocked = records.iter().filter(|r| r.is_blocked()).count() as u64;
    let total = records.len() as u64;
    QueryCounts {
        total,
        allowed: total - blocked,
        blocked,
    }
}

pub fn unique_clients(records: &[&QueryRecord]) -> u64 {
    records
        .iter()
        .map(|r| &r.client)
        .collect::<FxHashSet<_>>()
        .len() as u64
}

pub fn unique_domains(records: &[&QueryRecord]) -> u64 {
    records
        .iter()
        .map(|r| &r.domain)
        .collect::<FxHashSet<_>>()
        .len() as u64
}

fn with_verdict<'r, 'a>(
    records: &'r [&'a QueryRecord],
    verdict: Option<Verdict>,
) -> impl Iterator<Item = &'a QueryRecord> + 'r {
    records
        .iter()
        .copied()
        .filter(move |r| verdict.is_none_or(|v| r.verdict == v))
}

fn top_entry(tally: &Tally<Arc<str>>) -> Option<RankedEntry> {
    tally
        .top()
        .map(|(name, count)| RankedEntry::new(name.clone(), count))
}

pub fn top_domain(records: &[&QueryRecord], verdict: Verdict) -> Option<RankedEntry> {
    let tally: Tally<Arc<str>> = with_verdict(records, Some(verdict))
        .map(|r| r.domain.clone())
        .collect();
    top_entry(&tally)
}

/// Client with the most queries, optionally restricted to one verdict.
pub fn top_client(records: &[&QueryRecord], verdict: Option<Verdict>) -> Option<RankedEntry> {
    let tally: Tally<Arc<str>> = with_verdict(records, verdict)
        .map(|r| r.client.clone())
        .collect();
    top_entry(&tally)
}

/// Client that queried `domain` most often under `verdict`.
pub fn top_domain_client(
    records: &[&QueryRecord],
    verdict: Verdict,
    domain: &str,
) -> Option<RankedEntry> {
    let tally: Tally<Arc<str>> = with_verdict(records, Some(verdict))
        .filter(|r| &*r.domain == domain)
        .map(|r| r.client.clone())
        .collect();
    top_entry(&tally)
}

/// Client with the highest total query count across both verdicts.
pub fn most_persistent_client(records: &[&QueryRecord]) -> Option<RankedEntry> {
    top_client(records, None)
}

/// Client with the most distinct blocked domains.
pub fn most_diverse_client(records: &[&QueryRecord]) -> Option<RankedEntry> {
    let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();
    let mut tally: Tally<Arc<str>> = Tally::new();
    for record in with_verdict(records, Some(Verdict::Blocked)) {
        if seen.insert((&*record.client, &*record.domain)) {
            tally.add(record.client.clone());
        }
    }
    top_entry(&tally)
}

/// The client/domain pair with the most blocked queries.
pub fn most_repeated_blocked_attempt(records: &[&QueryRecord]) -> Option<BlockedAttempt> {
    let tally: Tally<(Arc<str>, Arc<str>)> = with_verdict(records, Some(Verdict::Blocked))
        .map(|r| (r.client.clone(), r.domain.clone()))
        .collect();
    tally.top().map(|((client, domain), count)| BlockedAttempt {
        client: client.clone(),
        domain: domain.clone(),
        count,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplyTimeSummary {
    pub average: Option<Duration>,
    pub min: Option<Duration>,
    pub max: Option<Duration>,
}

pub fn reply_time_summary(records: &[&QueryRecord]) -> ReplyTimeSummary {
    let samples = || records.iter().filter_map(|r| r.reply_time);
    ReplyTimeSummary {
        average: mean_duration(samples()),
        min: samples().min(),
        max: samples().max(),
    }
}

pub fn top_domains(records: &[&QueryRecord], verdict: Verdict, limit: usize) -> Vec<RankedEntry> {
    let tally: Tally<Arc<str>> = with_verdict(records, Some(verdict))
        .map(|r| r.domain.clone())
        .collect();
    tally
        .ranked(limit)
        .into_iter()
        .map(|(name, count)| RankedEntry::new(name.clone(), count))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientBreakdown {
    pub client: Arc<str>,
    pub total: u64,
    pub allowed: u64,
    pub blocked: u64,
}

/// Busiest clients with their per-verdict counts.
pub fn client_breakdown(records: &[&QueryRecord], limit: usize) -> Vec<ClientBreakdown> {
    let totals: Tally<Arc<str>> = records.iter().map(|r| r.client.clone()).collect();
    let blocked: Tally<Arc<str>> = with_verdict(records, Some(Verdict::Blocked))
        .map(|r| r.client.clone())
        .collect();
    totals
        .ranked(limit)
        .into_iter()
        .map(|(client, total)| {
            let blocked = blocked.count(client);
            ClientBreakdown {
                client: client.clone(),
                total,
                allowed: total - blocked,
                blocked,
            }
        })
        .collect()
}
