//! Date-range cross-validation for the forecast form.
//!
//! Six rules scanned in a fixed priority order with an early exit, so a pass
//! reports at most one range message plus the general banner. The scan order
//! is deliberate and pinned by tests; sequencing (rule 4) is checked before
//! the forecast-range rules ever run.

use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

use crate::model::{first_of_month, month_label, MonthRange};

// ── Messages ────────────────────────────────────────────────────

const ORDERING_MESSAGE: &str =
    "⚠️ The start date must come before, or be the same as, the end date.";
const ANALOG_SPAN_MESSAGE: &str = "⚠️ Analog search range can only be up to 12 months total.";
const SEQUENCING_MESSAGE: &str =
    "⚠️ Analog search range must end before the start of the forecast date range.";
const FORECAST_SPAN_MESSAGE: &str = "⚠️ Forecast range can only be up to 12 months total.";

/// Shown next to the submit control whenever any rule fails.
pub const GENERAL_MESSAGE: &str =
    "Please fix the invalid configurations elsewhere on this page before running this forecast.";

fn availability_message(max_available: NaiveDate) -> String {
    format!(
        "⚠️ Data aren't available after {}. Please change the end date to be no later than that.",
        month_label(max_available)
    )
}

// ── Results ─────────────────────────────────────────────────────

/// Where a validation message is displayed on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MessageScope {
    Analog,
    Forecast,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ValidationMessage {
    pub scope: MessageScope,
    pub message: String,
}

/// Outcome of one validation pass. `Invalid` carries the messages in display
/// order: the failing rule's scoped message first, then the general banner.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(tag = "status", rename_all = "lowercase")]
#[ts(export)]
pub enum ValidationResult {
    Valid,
    Invalid { errors: Vec<ValidationMessage> },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The submit control is disabled, not merely warned, while any rule fails.
    pub fn submit_disabled(&self) -> bool {
        !self.is_valid()
    }

    pub fn errors(&self) -> &[ValidationMessage] {
        match self {
            Self::Valid => &[],
            Self::Invalid { errors } => errors,
        }
    }

    /// Flatten into one message slot per scope for the form UI.
    pub fn report(&self) -> ValidationReport {
        let mut report = ValidationReport {
            analog: None,
            forecast: None,
            general: None,
            submit_disabled: self.submit_disabled(),
        };
        for err in self.errors() {
            let slot = match err.scope {
                MessageScope::Analog => &mut report.analog,
                MessageScope::Forecast => &mut report.forecast,
                MessageScope::General => &mut report.general,
            };
            if slot.is_none() {
                *slot = Some(err.message.clone());
            }
        }
        report
    }
}

/// Per-slot view of a validation pass: at most one message next to each
/// date-range group, the general banner, and the submit flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub analog: Option<String>,
    pub forecast: Option<String>,
    pub general: Option<String>,
    pub submit_disabled: bool,
}

// ── Validator ───────────────────────────────────────────────────

/// Run the date-range rules in priority order, stopping at the first
/// failure:
///
/// 1. analog end past the availability ceiling
/// 2. analog range misordered
/// 3. analog range longer than twelve months (inclusive boundary)
/// 4. analog range not strictly before the forecast range
/// 5. forecast range misordered
/// 6. forecast range longer than twelve months (inclusive boundary)
///
/// `max_available` is the most recent month with published source data; it
/// is compared at month granularity like everything else. Caller contract:
/// all three inputs come from successfully parsed dates. Malformed date
/// strings are rejected by the caller (`parse_month`) and never reach here.
pub fn validate_date_ranges(
    analog: MonthRange,
    forecast: MonthRange,
    max_available: NaiveDate,
) -> ValidationResult {
    let max_available = first_of_month(max_available);

    if analog.end() > max_available {
        return invalid(MessageScope::Analog, availability_message(max_available));
    }
    if analog.start() > analog.end() {
        return invalid(MessageScope::Analog, ORDERING_MESSAGE.to_string());
    }
    if analog.exceeds_twelve_months() {
        return invalid(MessageScope::Analog, ANALOG_SPAN_MESSAGE.to_string());
    }
    // Sequencing outranks rules 5 and 6: a form failing both shows the
    // sequencing message and nothing in the forecast slot.
    if analog.end() >= forecast.start() {
        return invalid(MessageScope::Analog, SEQUENCING_MESSAGE.to_string());
    }
    if forecast.start() > forecast.end() {
        return invalid(MessageScope::Forecast, ORDERING_MESSAGE.to_string());
    }
    if forecast.exceeds_twelve_months() {
        return invalid(MessageScope::Forecast, FORECAST_SPAN_MESSAGE.to_string());
    }
    ValidationResult::Valid
}

fn invalid(scope: MessageScope, message: String) -> ValidationResult {
    ValidationResult::Invalid {
        errors: vec![
            ValidationMessage { scope, message },
            ValidationMessage {
                scope: MessageScope::General,
                message: GENERAL_MESSAGE.to_string(),
            },
        ],
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(start: (i32, u32), end: (i32, u32)) -> MonthRange {
        MonthRange::new(ymd(start.0, start.1, 1), ymd(end.0, end.1, 1))
    }

    #[test]
    fn valid_windows_pass_and_enable_submit() {
        let result = validate_date_ranges(
            range((2023, 1), (2023, 3)),
            range((2023, 4), (2023, 5)),
            ymd(2023, 3, 1),
        );
        assert!(result.is_valid());
        assert!(!result.submit_disabled());
        let report = result.report();
        assert_eq!(report.analog, None);
        assert_eq!(report.forecast, None);
        assert_eq!(report.general, None);
    }

    #[test]
    fn availability_ceiling_wins_over_ordering() {
        // Analog end is past the ceiling AND the range is misordered; only
        // the rule-1 message appears.
        let result = validate_date_ranges(
            range((2023, 6), (2023, 5)),
            range((2023, 7), (2023, 8)),
            ymd(2023, 3, 1),
        );
        let report = result.report();
        assert!(report.analog.unwrap().contains("aren't available"));
        assert_eq!(report.forecast, None);
    }

    #[test]
    fn availability_message_names_the_ceiling_month() {
        let result = validate_date_ranges(
            range((2023, 1), (2023, 5)),
            range((2023, 6), (2023, 7)),
            ymd(2023, 3, 1),
        );
        let report = result.report();
        assert!(report.analog.unwrap().contains("March 2023"));
    }

    #[test]
    fn misordered_analog_range_fails() {
        let result = validate_date_ranges(
            range((2023, 3), (2023, 1)),
            range((2023, 4), (2023, 5)),
            ymd(2023, 3, 1),
        );
        let report = result.report();
        assert!(report.analog.unwrap().contains("start date must come before"));
        assert_eq!(report.forecast, None);
        assert!(report.submit_disabled);
    }

    #[test]
    fn exactly_twelve_month_analog_span_passes() {
        let result = validate_date_ranges(
            range((2022, 3), (2023, 3)),
            range((2023, 4), (2023, 5)),
            ymd(2023, 3, 1),
        );
        assert!(result.is_valid());
    }

    #[test]
    fn thirteen_month_analog_span_fails() {
        let result = validate_date_ranges(
            range((2022, 2), (2023, 3)),
            range((2023, 4), (2023, 5)),
            ymd(2023, 3, 1),
        );
        let report = result.report();
        assert!(report.analog.unwrap().contains("up to 12 months"));
    }

    #[test]
    fn analog_end_touching_forecast_start_fails_sequencing() {
        let result = validate_date_ranges(
            range((2023, 1), (2023, 3)),
            range((2023, 3), (2023, 4)),
            ymd(2023, 3, 1),
        );
        let report = result.report();
        assert!(report.analog.unwrap().contains("must end before"));
    }

    #[test]
    fn sequencing_beats_forecast_rules() {
        // Sequencing fails and the forecast range is also misordered; the
        // sequencing message is the one reported, in the analog slot.
        let result = validate_date_ranges(
            range((2023, 1), (2023, 3)),
            range((2023, 2), (2023, 1)),
            ymd(2023, 3, 1),
        );
        let report = result.report();
        assert!(report.analog.unwrap().contains("must end before"));
        assert_eq!(report.forecast, None);
    }

    #[test]
    fn misordered_forecast_range_fails_in_the_forecast_slot() {
        let result = validate_date_ranges(
            range((2023, 1), (2023, 3)),
            range((2023, 6), (2023, 5)),
            ymd(2023, 3, 1),
        );
        let report = result.report();
        assert_eq!(report.analog, None);
        assert!(report.forecast.unwrap().contains("start date must come before"));
    }

    #[test]
    fn overlong_forecast_range_fails_in_the_forecast_slot() {
        // The worked example: stretching forecast_end to thirteen months
        // after forecast_start flips a valid form to a forecast-scope error.
        let result = validate_date_ranges(
            range((2023, 1), (2023, 3)),
            range((2023, 4), (2024, 6)),
            ymd(2023, 3, 1),
        );
        let report = result.report();
        assert_eq!(report.analog, None);
        assert!(report.forecast.unwrap().contains("Forecast range"));
        assert!(report.submit_disabled);
    }

    #[test]
    fn exactly_twelve_month_forecast_span_passes() {
        let result = validate_date_ranges(
            range((2023, 1), (2023, 3)),
            range((2023, 4), (2024, 4)),
            ymd(2023, 3, 1),
        );
        assert!(result.is_valid());
    }

    #[test]
    fn analog_failure_suppresses_forecast_display() {
        // Both the analog ordering and the forecast span are broken; only
        // the analog message shows, but submit is still disabled.
        let result = validate_date_ranges(
            range((2023, 3), (2023, 1)),
            range((2023, 4), (2024, 6)),
            ymd(2023, 3, 1),
        );
        let report = result.report();
        assert!(report.analog.is_some());
        assert_eq!(report.forecast, None);
        assert!(report.submit_disabled);
    }

    #[test]
    fn every_failure_carries_the_general_banner() {
        let result = validate_date_ranges(
            range((2023, 3), (2023, 1)),
            range((2023, 4), (2023, 5)),
            ymd(2023, 3, 1),
        );
        assert_eq!(result.report().general.as_deref(), Some(GENERAL_MESSAGE));
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn ceiling_is_compared_at_month_granularity() {
        // A mid-month ceiling snaps to its month; an analog end in the same
        // month does not trip the availability rule.
        let result = validate_date_ranges(
            range((2023, 1), (2023, 3)),
            range((2023, 4), (2023, 5)),
            ymd(2023, 3, 28),
        );
        assert!(result.is_valid());
    }

    #[test]
    fn scopes_serialize_lowercase() {
        let result = validate_date_ranges(
            range((2023, 3), (2023, 1)),
            range((2023, 4), (2023, 5)),
            ymd(2023, 3, 1),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "invalid");
        assert_eq!(json["errors"][0]["scope"], "analog");
        assert_eq!(json["errors"][1]["scope"], "general");
    }
}
