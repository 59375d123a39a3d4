use crate::errors::DomainError;
use crate::query_record::Verdict;
use std::collections::BTreeMap;

/// Pi-hole FTL status ids answered from upstream, cache or local config.
pub const FTL_ALLOWED_STATUSES: &[i64] = &[2, 3, 12, 13, 14, 17];

/// Pi-hole FTL status ids for gravity, regex, denylist, upstream and
/// special-domain blocking, including their CNAME-inspected variants.
pub const FTL_BLOCKED_STATUSES: &[i64] = &[1, 4, 5, 6, 7, 8, 9, 10, 11, 15, 16, 18];

/// Lookup table collapsing the log's raw status vocabulary into a [`Verdict`].
///
/// Codes absent from the table have no verdict; records carrying them are
/// rejected during normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMapping {
    table: BTreeMap<i64, Verdict>,
}

impl StatusMapping {
    pub fn new(allowed: &[i64], blocked: &[i64]) -> Result<Self, DomainError> {
        let mut table = BTreeMap::new();
        for &status in allowed {
            table.insert(status, Verdict::Allowed);
        }
        for &status in blocked {
            if table.insert(status, Verdict::Blocked) == Some(Verdict::Allowed) {
                return Err(DomainError::InvalidStatusMapping(format!(
                    "status {status} is listed as both allowed and blocked"
                )));
            }
        }
        Ok(Self { table })
    }

    pub fn pihole_ftl() -> Self {
        let mut table = BTreeMap::new();
        table.extend(FTL_ALLOWED_STATUSES.iter().map(|&s| (s, Verdict::Allowed)));
        table.extend(FTL_BLOCKED_STATUSES.iter().map(|&s| (s, Verdict::Blocked)));
        Self { table }
    }

    pub fn verdict_for(&self, status: i64) -> Option<Verdict> {
        self.table.get(&status).copied()
    }

    pub fn statuses(&self, verdict: Verdict) -> Vec<i64> {
        self.table
            .iter()
            .filter(|(_, v)| **v == verdict)
            .map(|(status, _)| *status)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for StatusMapping {
    fn default() -> Self {
        Self::pihole_ftl()
    }
}
