pub mod fields;
pub mod validation;

use chrono::NaiveDate;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::model::{
    first_of_month, shift_months, BoundingBox, CorrelationMode, DetrendFlag, ForecastTheme,
    MatchMode, MonthRange, WeightMode, DATE_FORMAT,
};
use fields::FieldId;

// ── Form state ──────────────────────────────────────────────────

/// The complete form state, rebuilt from the UI on every change event and
/// never stored. Enumerated fields carry their numeric wire code in JSON.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, TS)]
#[ts(export)]
pub struct ForecastForm {
    pub analog_bbox: BoundingBox,
    pub forecast_bbox: BoundingBox,
    pub analog_range: MonthRange,
    pub forecast_range: MonthRange,
    pub num_analogs: u8,
    #[ts(type = "number")]
    #[schemars(with = "u8")]
    pub forecast_theme: ForecastTheme,
    #[ts(type = "number")]
    #[schemars(with = "u8")]
    pub auto_weight: WeightMode,
    pub manual_weights: [f64; 5],
    #[ts(type = "number")]
    #[schemars(with = "u8")]
    pub correlation: CorrelationMode,
    #[ts(type = "number")]
    #[schemars(with = "u8")]
    pub manual_match: MatchMode,
    pub override_years: [i32; 5],
    #[ts(type = "number")]
    #[schemars(with = "u8")]
    pub detrend: DetrendFlag,
    pub pressure_height: u16,
    pub pressure_temp: u16,
}

impl ForecastForm {
    /// The form as it first loads: default regions, an analog window ending
    /// one month back, a forecast window starting this month.
    pub fn default_for(today: NaiveDate) -> Self {
        Self {
            analog_bbox: BoundingBox::ANALOG_DEFAULT,
            forecast_bbox: BoundingBox::FORECAST_DEFAULT,
            analog_range: MonthRange::new(shift_months(today, -3), shift_months(today, -1)),
            forecast_range: MonthRange::new(first_of_month(today), shift_months(today, 2)),
            num_analogs: 5,
            forecast_theme: ForecastTheme::TwoMeterTemps,
            auto_weight: WeightMode::Automatic,
            manual_weights: [100.0, 0.0, 0.0, 0.0, 0.0],
            correlation: CorrelationMode::None,
            manual_match: MatchMode::Automatic,
            override_years: [1949, 1959, 1969, 1979, 1989],
            detrend: DetrendFlag::No,
            pressure_height: 500,
            pressure_temp: 850,
        }
    }

    /// Encode one field for the query string. Dates are `YYYY-MM-DD`,
    /// numbers pass through (integral floats drop the decimal point),
    /// enumerated fields become their numeric code. Zero and empty values
    /// encode like any other; nothing is skipped.
    pub fn field_value(&self, id: FieldId) -> String {
        match id {
            FieldId::AnalogBboxN => self.analog_bbox.north.to_string(),
            FieldId::AnalogBboxW => self.analog_bbox.west.to_string(),
            FieldId::AnalogBboxE => self.analog_bbox.east.to_string(),
            FieldId::AnalogBboxS => self.analog_bbox.south.to_string(),
            FieldId::ForecastBboxN => self.forecast_bbox.north.to_string(),
            FieldId::ForecastBboxW => self.forecast_bbox.west.to_string(),
            FieldId::ForecastBboxE => self.forecast_bbox.east.to_string(),
            FieldId::ForecastBboxS => self.forecast_bbox.south.to_string(),
            FieldId::AnalogDaterangeStart => {
                self.analog_range.start().format(DATE_FORMAT).to_string()
            }
            FieldId::AnalogDaterangeEnd => self.analog_range.end().format(DATE_FORMAT).to_string(),
            FieldId::ForecastDaterangeStart => {
                self.forecast_range.start().format(DATE_FORMAT).to_string()
            }
            FieldId::ForecastDaterangeEnd => {
                self.forecast_range.end().format(DATE_FORMAT).to_string()
            }
            FieldId::NumAnalogs => self.num_analogs.to_string(),
            FieldId::ForecastTheme => self.forecast_theme.code().to_string(),
            FieldId::AutoWeight => self.auto_weight.code().to_string(),
            FieldId::ManualWeight1 => self.manual_weights[0].to_string(),
            FieldId::ManualWeight2 => self.manual_weights[1].to_string(),
            FieldId::ManualWeight3 => self.manual_weights[2].to_string(),
            FieldId::ManualWeight4 => self.manual_weights[3].to_string(),
            FieldId::ManualWeight5 => self.manual_weights[4].to_string(),
            FieldId::Correlation => self.correlation.code().to_string(),
            FieldId::ManualMatch => self.manual_match.code().to_string(),
            FieldId::OverrideYear1 => self.override_years[0].to_string(),
            FieldId::OverrideYear2 => self.override_years[1].to_string(),
            FieldId::OverrideYear3 => self.override_years[2].to_string(),
            FieldId::OverrideYear4 => self.override_years[3].to_string(),
            FieldId::OverrideYear5 => self.override_years[4].to_string(),
            FieldId::DetrendData => self.detrend.code().to_string(),
            FieldId::PressureHeight => self.pressure_height.to_string(),
            FieldId::PressureTemp => self.pressure_temp.to_string(),
        }
    }

    pub fn visibility(&self) -> SectionVisibility {
        visible_sections(self.auto_weight, self.manual_match)
    }
}

/// JSON schema of the form payload, served next to the field catalog so the
/// front-end and tooling can check payloads without hardcoding shapes.
pub fn form_schema() -> Value {
    let root = schema_for!(ForecastForm);
    serde_json::to_value(root).unwrap_or(Value::Null)
}

// ── Section visibility ──────────────────────────────────────────

/// Which mode-gated form sections are shown. The front-end maps these
/// booleans onto its show/hide classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, TS)]
#[ts(export)]
pub struct SectionVisibility {
    pub manual_weights: bool,
    pub manual_match: bool,
}

/// Pure lookup from the two mode flags: manual weights show only when
/// auto-weighting is off, match years only when manual matching is on.
pub fn visible_sections(auto_weight: WeightMode, manual_match: MatchMode) -> SectionVisibility {
    SectionVisibility {
        manual_weights: matches!(auto_weight, WeightMode::Manual),
        manual_match: matches!(manual_match, MatchMode::Manual),
    }
}
