//! timezone-naive calendar arithmetic for due dates
//!
//! every date here is a `NaiveDate`, so there is no time of day and no zone
//! for a daylight-saving transition to shift a due date across midnight.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::errors::{Result, ScheduleError};
use crate::types::{BillingCycle, MonthOverflow};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// parse a strict `YYYY-MM-DD` date, naming `field` on failure
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    let bytes = trimmed.as_bytes();
    // chrono accepts unpadded components, the fixed-width shape is required here
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return Err(ScheduleError::invalid_date(field, value));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ScheduleError::invalid_date(field, value))
}

/// parse an optional date; blank strings count as absent
pub fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value {
        Some(v) if !v.trim().is_empty() => parse_date(field, v).map(Some),
        _ => Ok(None),
    }
}

/// zero-padded `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// add calendar months under the given overflow rule
///
/// returns `None` only when the result leaves chrono's representable range.
pub fn add_months(date: NaiveDate, months: u32, overflow: MonthOverflow) -> Option<NaiveDate> {
    match overflow {
        MonthOverflow::Clamp => date.checked_add_months(Months::new(months)),
        MonthOverflow::Carry => {
            let first = date.with_day(1)?.checked_add_months(Months::new(months))?;
            first.checked_add_signed(Duration::days(i64::from(date.day()) - 1))
        }
    }
}

impl BillingCycle {
    /// next due date after `date`
    pub fn advance(&self, date: NaiveDate, overflow: MonthOverflow) -> Option<NaiveDate> {
        add_months(date, self.months(), overflow)
    }
}
