use super::aggregates::{top_client, top_domain};
use querystats_domain::{DayNightBoundary, DayPeriod, QueryRecord, RankedEntry, Verdict};

/// Splits records into (day, night), keeping relative order inside each side.
pub fn split_day_night<'a>(
    records: &[&'a QueryRecord],
    boundary: &DayNightBoundary,
) -> (Vec<&'a QueryRecord>, Vec<&'a QueryRecord>) {
    records
        .iter()
        .copied()
        .partition(|r| boundary.classify(r.hour()) == DayPeriod::Day)
}

/// Aggregates re-run independently for one side of the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartitionSummary {
    pub total: u64,
    pub top_allowed: Option<RankedEntry>,
    pub top_blocked: Option<RankedEntry>,
    pub top_client: Option<RankedEntry>,
}

impl PartitionSummary {
    pub fn summarize(records: &[&QueryRecord]) -> Self {
        Self {
            total: records.len() as u64,
            top_allowed: top_domain(records, Verdict::Allowed),
            top_blocked: top_domain(records, Verdict::Blocked),
            top_client: top_client(records, None),
        }
    }
}

pub fn summarize_day_night(
    records: &[&QueryRecord],
    boundary: &DayNightBoundary,
) -> (PartitionSummary, PartitionSummary) {
    let (day, night) = split_day_night(records, boundary);
    (
        PartitionSummary::summarize(&day),
        PartitionSummary::summarize(&night),
    )
}
