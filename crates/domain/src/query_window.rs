use crate::errors::DomainError;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest window accepted, about a century.
pub const MAX_WINDOW_DAYS: u32 = 36_500;

/// Span of calendar time to load, plus an optional client restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryWindow {
    pub days: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client: Option<String>,
}

impl QueryWindow {
    pub fn last_days(days: u32) -> Self {
        Self {
            days,
            start_date: None,
            end_date: None,
            client: None,
        }
    }

    pub fn between(mut self, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn for_client(mut self, client: Option<String>) -> Self {
        self.client = client.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .map_err(|_| DomainError::InvalidDate(value.to_string()))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.days == 0 {
            return Err(DomainError::ConfigError(
                "window must span at least one day".to_string(),
            ));
        }
        if self.days > MAX_WINDOW_DAYS {
            return Err(DomainError::ConfigError(format!(
                "window of {} days exceeds the {MAX_WINDOW_DAYS} day maximum",
                self.days
            )));
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(DomainError::InvalidDateRange {
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Resolves the window into half-open local bounds `[start, end)`.
    ///
    /// Explicit dates are whole days: an end date includes all of that day.
    /// With a single date the other bound is `days` away from it; with none
    /// the window ends at `now`. Bounds outside the calendar are an
    /// `InvalidDateRange`.
    pub fn local_bounds(
        &self,
        now: NaiveDateTime,
    ) -> Result<(NaiveDateTime, NaiveDateTime), DomainError> {
        let span = Duration::days(i64::from(self.days));
        let one_day = Duration::days(1);
        let bounds = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => midnight(end)
                .checked_add_signed(one_day)
                .map(|end| (midnight(start), end)),
            (Some(start), None) => midnight(start)
                .checked_add_signed(span)
                .map(|end| (midnight(start), end)),
            (None, Some(end)) => midnight(end)
                .checked_add_signed(one_day)
                .and_then(|end| Some((end.checked_sub_signed(span)?, end))),
            (None, None) => now.checked_sub_signed(span).map(|start| (start, now)),
        };
        bounds.ok_or_else(|| self.out_of_range(now))
    }

    fn out_of_range(&self, now: NaiveDateTime) -> DomainError {
        let describe = |date: Option<NaiveDate>| {
            date.map_or_else(|| now.date().to_string(), |d| d.to_string())
        };
        DomainError::InvalidDateRange {
            start: format!("{} ({} days)", describe(self.start_date), self.days),
            end: describe(self.end_date),
        }
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
