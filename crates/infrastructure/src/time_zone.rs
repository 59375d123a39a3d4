use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use querystats_domain::{DomainError, QueryWindow};
use tracing::warn;

pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// Like [`parse_timezone`], but an unknown zone falls back to UTC.
pub fn resolve_timezone(name: &str) -> Tz {
    parse_timezone(name).unwrap_or_else(|e| {
        warn!(error = %e, "Falling back to UTC");
        Tz::UTC
    })
}

/// Epoch seconds `[start, end)` covering `window` in zone `tz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampRange {
    pub start: i64,
    pub end: i64,
}

impl TimestampRange {
    pub fn for_window(
        window: &QueryWindow,
        tz: Tz,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let local_now = now.with_timezone(&tz).naive_local();
        let (start, end) = window.local_bounds(local_now)?;
        let open_ended = window.start_date.is_none() && window.end_date.is_none();
        Ok(Self {
            start: local_to_epoch(start, tz),
            // a window ending at `now` still includes queries logged this second
            end: local_to_epoch(end, tz) + i64::from(open_ended),
        })
    }
}

/// Local wall-clock time to epoch seconds. Times skipped by a DST jump are
/// pushed forward to the first instant that exists.
fn local_to_epoch(local: NaiveDateTime, tz: Tz) -> i64 {
    if let Some(instant) = tz.from_local_datetime(&local).earliest() {
        return instant.timestamp();
    }
    tz.from_local_datetime(&(local + chrono::Duration::hours(1)))
        .earliest()
        .map(|instant| instant.timestamp())
        .unwrap_or_else(|| local.and_utc().timestamp())
}

/// Epoch seconds (possibly fractional) to a timestamp in `tz`, keeping only
/// the zone's offset at that instant.
pub fn epoch_to_local(seconds: f64, tz: Tz) -> Option<DateTime<FixedOffset>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round().min(999_999_999.0) as u32;
    let utc = DateTime::<Utc>::from_timestamp(whole as i64, nanos)?;
    Some(utc.with_timezone(&tz).fixed_offset())
}
