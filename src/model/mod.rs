pub mod bbox;
pub mod codes;
pub mod month;

// Re-export the types the rest of the crate reaches for.
pub use bbox::BoundingBox;
pub use codes::{CorrelationMode, DetrendFlag, ForecastTheme, MatchMode, WeightMode};
pub use month::{
    earliest_analog_month, first_of_month, latest_available_month, month_label, parse_month,
    shift_months, MonthRange, DATE_FORMAT,
};
