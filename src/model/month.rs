use chrono::{Datelike, Months, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::AppError;

/// Wire format for all dates, both in query strings and JSON payloads.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest month selectable for an analog search; source data starts here.
pub fn earliest_analog_month() -> NaiveDate {
    NaiveDate::from_ymd_opt(1950, 1, 1).unwrap_or_default()
}

/// Snap a date to the first of its month. All range comparisons happen at
/// month granularity, so the day component is dropped as early as possible.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shift a date by whole months, normalized to the first of the month.
pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let date = first_of_month(date);
    let shifted = if delta >= 0 {
        date.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// The most recent month with published source data: one month behind the
/// given date. Analog ranges may not end after this.
pub fn latest_available_month(today: NaiveDate) -> NaiveDate {
    shift_months(today, -1)
}

/// Parse a strict `YYYY-MM-DD` date and normalize it to the first of the
/// month. `field` names the offending input in the error.
pub fn parse_month(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(first_of_month)
        .map_err(|_| AppError::DateParse {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Human-readable month name for user-facing messages, e.g. "March 2023".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// An inclusive month range. Both endpoints are normalized to the first of
/// their month on construction. Ordering is not enforced here: a misordered
/// range is a user-facing validation message, not a construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, TS)]
#[serde(from = "MonthRangeRaw")]
#[ts(export)]
pub struct MonthRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize, JsonSchema)]
struct MonthRangeRaw {
    start: NaiveDate,
    end: NaiveDate,
}

impl From<MonthRangeRaw> for MonthRange {
    fn from(raw: MonthRangeRaw) -> Self {
        MonthRange::new(raw.start, raw.end)
    }
}

impl MonthRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: first_of_month(start),
            end: first_of_month(end),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// True when the range spans more than twelve months. The boundary is
    /// inclusive: a start exactly twelve months before the end still fits.
    pub fn exceeds_twelve_months(&self) -> bool {
        self.end
            .checked_sub_months(Months::new(12))
            .is_some_and(|floor| self.start < floor)
    }
}
