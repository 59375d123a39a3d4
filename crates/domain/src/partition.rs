use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DAY_START_HOUR: u32 = 6;
pub const DEFAULT_DAY_END_HOUR: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Day,
    Night,
}

/// Hour-of-day split between the day and night partitions.
///
/// Day covers `[day_start_hour, day_end_hour)`, night is every other hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayNightBoundary {
    day_start_hour: u32,
    day_end_hour: u32,
}

impl DayNightBoundary {
    pub fn new(day_start_hour: u32, day_end_hour: u32) -> Result<Self, DomainError> {
        if day_end_hour > 24 {
            return Err(DomainError::InvalidBoundary(format!(
                "day end hour {day_end_hour} is past 24"
            )));
        }
        if day_start_hour >= day_end_hour {
            return Err(DomainError::InvalidBoundary(format!(
                "day start hour {day_start_hour} must be before day end hour {day_end_hour}"
            )));
        }
        Ok(Self {
            day_start_hour,
            day_end_hour,
        })
    }

    pub fn day_start_hour(&self) -> u32 {
        self.day_start_hour
    }

    pub fn day_end_hour(&self) -> u32 {
        self.day_end_hour
    }

    pub fn classify(&self, hour: u32) -> DayPeriod {
        if (self.day_start_hour..self.day_end_hour).contains(&hour) {
            DayPeriod::Day
        } else {
            DayPeriod::Night
        }
    }
}

impl Default for DayNightBoundary {
    fn default() -> Self {
        Self {
            day_start_hour: DEFAULT_DAY_START_HOUR,
            day_end_hour: DEFAULT_DAY_END_HOUR,
        }
    }
}
