use indexmap::IndexSet;
use serde::Serialize;
use ts_rs::TS;

use crate::model::{CorrelationMode, DetrendFlag, ForecastTheme, MatchMode, WeightMode};

// ── Field identifiers ───────────────────────────────────────────

/// Every parameter the forecast API accepts, in wire declaration order.
/// Query strings are encoded by iterating this order, never alphabetized,
/// so the variant order here is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    AnalogBboxN,
    AnalogBboxW,
    AnalogBboxE,
    AnalogBboxS,
    ForecastBboxN,
    ForecastBboxW,
    ForecastBboxE,
    ForecastBboxS,
    AnalogDaterangeStart,
    AnalogDaterangeEnd,
    ForecastDaterangeStart,
    ForecastDaterangeEnd,
    NumAnalogs,
    ForecastTheme,
    AutoWeight,
    ManualWeight1,
    ManualWeight2,
    ManualWeight3,
    ManualWeight4,
    ManualWeight5,
    Correlation,
    ManualMatch,
    OverrideYear1,
    OverrideYear2,
    OverrideYear3,
    OverrideYear4,
    OverrideYear5,
    DetrendData,
    PressureHeight,
    PressureTemp,
}

impl FieldId {
    pub const ALL: [FieldId; 30] = [
        Self::AnalogBboxN,
        Self::AnalogBboxW,
        Self::AnalogBboxE,
        Self::AnalogBboxS,
        Self::ForecastBboxN,
        Self::ForecastBboxW,
        Self::ForecastBboxE,
        Self::ForecastBboxS,
        Self::AnalogDaterangeStart,
        Self::AnalogDaterangeEnd,
        Self::ForecastDaterangeStart,
        Self::ForecastDaterangeEnd,
        Self::NumAnalogs,
        Self::ForecastTheme,
        Self::AutoWeight,
        Self::ManualWeight1,
        Self::ManualWeight2,
        Self::ManualWeight3,
        Self::ManualWeight4,
        Self::ManualWeight5,
        Self::Correlation,
        Self::ManualMatch,
        Self::OverrideYear1,
        Self::OverrideYear2,
        Self::OverrideYear3,
        Self::OverrideYear4,
        Self::OverrideYear5,
        Self::DetrendData,
        Self::PressureHeight,
        Self::PressureTemp,
    ];

    pub const fn wire_key(self) -> &'static str {
        match self {
            Self::AnalogBboxN => "analog_bbox_n",
            Self::AnalogBboxW => "analog_bbox_w",
            Self::AnalogBboxE => "analog_bbox_e",
            Self::AnalogBboxS => "analog_bbox_s",
            Self::ForecastBboxN => "forecast_bbox_n",
            Self::ForecastBboxW => "forecast_bbox_w",
            Self::ForecastBboxE => "forecast_bbox_e",
            Self::ForecastBboxS => "forecast_bbox_s",
            Self::AnalogDaterangeStart => "analog_daterange_start",
            Self::AnalogDaterangeEnd => "analog_daterange_end",
            Self::ForecastDaterangeStart => "forecast_daterange_start",
            Self::ForecastDaterangeEnd => "forecast_daterange_end",
            Self::NumAnalogs => "num_analogs",
            Self::ForecastTheme => "forecast_theme",
            Self::AutoWeight => "auto_weight",
            Self::ManualWeight1 => "manual_weight_1",
            Self::ManualWeight2 => "manual_weight_2",
            Self::ManualWeight3 => "manual_weight_3",
            Self::ManualWeight4 => "manual_weight_4",
            Self::ManualWeight5 => "manual_weight_5",
            Self::Correlation => "correlation",
            Self::ManualMatch => "manual_match",
            Self::OverrideYear1 => "override_year_1",
            Self::OverrideYear2 => "override_year_2",
            Self::OverrideYear3 => "override_year_3",
            Self::OverrideYear4 => "override_year_4",
            Self::OverrideYear5 => "override_year_5",
            Self::DetrendData => "detrend_data",
            Self::PressureHeight => "pressure_height",
            Self::PressureTemp => "pressure_temp",
        }
    }
}

// ── Catalog ─────────────────────────────────────────────────────

/// Which form panel a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldGroup {
    Analog,
    Forecast,
    Weighting,
    Matching,
    Options,
}

/// One selectable option of an enumerated field.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct ChoiceOption {
    pub code: u8,
    pub label: &'static str,
}

/// Input widget shape for a field, with whatever bounds or options the
/// front-end needs to render it. Year fields have no upper bound here; the
/// current year is a clock fact, not catalog data.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Degrees,
    MonthDate,
    Count { min: u8, max: u8 },
    Weight,
    Year { min: i32 },
    Choice { options: &'static [ChoiceOption] },
    PressureLevel { options: &'static [u16] },
}

/// A catalog entry: identity plus everything the UI needs to render the
/// field. `exposed` marks the pared-back tool variant; unexposed fields
/// still serialize at their defaults.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
    pub group: FieldGroup,
    pub exposed: bool,
}

static THEME_OPTIONS: [ChoiceOption; 6] = [
    ChoiceOption { code: ForecastTheme::Slp.code(), label: ForecastTheme::Slp.label() },
    ChoiceOption {
        code: ForecastTheme::PressureHeight.code(),
        label: ForecastTheme::PressureHeight.label(),
    },
    ChoiceOption {
        code: ForecastTheme::TwoMeterTemps.code(),
        label: ForecastTheme::TwoMeterTemps.label(),
    },
    ChoiceOption {
        code: ForecastTheme::PressureTemp.code(),
        label: ForecastTheme::PressureTemp.label(),
    },
    ChoiceOption { code: ForecastTheme::Sst.code(), label: ForecastTheme::Sst.label() },
    ChoiceOption {
        code: ForecastTheme::Precip.code(),
        label: ForecastTheme::Precip.label(),
    },
];

static CORRELATION_OPTIONS: [ChoiceOption; 4] = [
    ChoiceOption {
        code: CorrelationMode::None.code(),
        label: CorrelationMode::None.label(),
    },
    ChoiceOption {
        code: CorrelationMode::RValueMaps.code(),
        label: CorrelationMode::RValueMaps.label(),
    },
    ChoiceOption {
        code: CorrelationMode::R2ValueMaps.code(),
        label: CorrelationMode::R2ValueMaps.label(),
    },
    ChoiceOption {
        code: CorrelationMode::MultipleR.code(),
        label: CorrelationMode::MultipleR.label(),
    },
];

static AUTO_WEIGHT_OPTIONS: [ChoiceOption; 2] = [
    ChoiceOption { code: WeightMode::Automatic.code(), label: "Yes" },
    ChoiceOption { code: WeightMode::Manual.code(), label: "No" },
];

static MANUAL_MATCH_OPTIONS: [ChoiceOption; 2] = [
    ChoiceOption { code: MatchMode::Automatic.code(), label: "No" },
    ChoiceOption { code: MatchMode::Manual.code(), label: "Yes" },
];

static DETREND_OPTIONS: [ChoiceOption; 2] = [
    ChoiceOption { code: DetrendFlag::No.code(), label: "No" },
    ChoiceOption { code: DetrendFlag::Yes.code(), label: "Yes" },
];

/// Standard reanalysis pressure levels (hPa) offered for the two
/// pressure-level themes.
pub static PRESSURE_LEVELS: [u16; 5] = [925, 850, 700, 500, 300];

/// Earliest override year; analog source data reaches back to 1949.
pub const EARLIEST_OVERRIDE_YEAR: i32 = 1949;

/// The full parameter catalog, in wire declaration order.
pub static CATALOG: [FieldDef; 30] = [
    FieldDef {
        id: FieldId::AnalogBboxN,
        label: "North",
        kind: FieldKind::Degrees,
        group: FieldGroup::Analog,
        exposed: true,
    },
    FieldDef {
        id: FieldId::AnalogBboxW,
        label: "West",
        kind: FieldKind::Degrees,
        group: FieldGroup::Analog,
        exposed: true,
    },
    FieldDef {
        id: FieldId::AnalogBboxE,
        label: "East",
        kind: FieldKind::Degrees,
        group: FieldGroup::Analog,
        exposed: true,
    },
    FieldDef {
        id: FieldId::AnalogBboxS,
        label: "South",
        kind: FieldKind::Degrees,
        group: FieldGroup::Analog,
        exposed: true,
    },
    FieldDef {
        id: FieldId::ForecastBboxN,
        label: "North",
        kind: FieldKind::Degrees,
        group: FieldGroup::Forecast,
        exposed: true,
    },
    FieldDef {
        id: FieldId::ForecastBboxW,
        label: "West",
        kind: FieldKind::Degrees,
        group: FieldGroup::Forecast,
        exposed: true,
    },
    FieldDef {
        id: FieldId::ForecastBboxE,
        label: "East",
        kind: FieldKind::Degrees,
        group: FieldGroup::Forecast,
        exposed: true,
    },
    FieldDef {
        id: FieldId::ForecastBboxS,
        label: "South",
        kind: FieldKind::Degrees,
        group: FieldGroup::Forecast,
        exposed: true,
    },
    FieldDef {
        id: FieldId::AnalogDaterangeStart,
        label: "Analog start month",
        kind: FieldKind::MonthDate,
        group: FieldGroup::Analog,
        exposed: true,
    },
    FieldDef {
        id: FieldId::AnalogDaterangeEnd,
        label: "Analog end month",
        kind: FieldKind::MonthDate,
        group: FieldGroup::Analog,
        exposed: true,
    },
    FieldDef {
        id: FieldId::ForecastDaterangeStart,
        label: "Forecast start month",
        kind: FieldKind::MonthDate,
        group: FieldGroup::Forecast,
        exposed: true,
    },
    FieldDef {
        id: FieldId::ForecastDaterangeEnd,
        label: "Forecast end month",
        kind: FieldKind::MonthDate,
        group: FieldGroup::Forecast,
        exposed: true,
    },
    FieldDef {
        id: FieldId::NumAnalogs,
        label: "Number of analogs",
        kind: FieldKind::Count { min: 1, max: 5 },
        group: FieldGroup::Options,
        exposed: false,
    },
    FieldDef {
        id: FieldId::ForecastTheme,
        label: "Forecast theme",
        kind: FieldKind::Choice { options: &THEME_OPTIONS },
        group: FieldGroup::Forecast,
        exposed: true,
    },
    FieldDef {
        id: FieldId::AutoWeight,
        label: "Auto-weight components?",
        kind: FieldKind::Choice { options: &AUTO_WEIGHT_OPTIONS },
        group: FieldGroup::Weighting,
        exposed: false,
    },
    FieldDef {
        id: FieldId::ManualWeight1,
        label: ForecastTheme::Slp.label(),
        kind: FieldKind::Weight,
        group: FieldGroup::Weighting,
        exposed: false,
    },
    FieldDef {
        id: FieldId::ManualWeight2,
        label: ForecastTheme::PressureHeight.label(),
        kind: FieldKind::Weight,
        group: FieldGroup::Weighting,
        exposed: false,
    },
    FieldDef {
        id: FieldId::ManualWeight3,
        label: ForecastTheme::TwoMeterTemps.label(),
        kind: FieldKind::Weight,
        group: FieldGroup::Weighting,
        exposed: false,
    },
    FieldDef {
        id: FieldId::ManualWeight4,
        label: ForecastTheme::PressureTemp.label(),
        kind: FieldKind::Weight,
        group: FieldGroup::Weighting,
        exposed: false,
    },
    FieldDef {
        id: FieldId::ManualWeight5,
        label: ForecastTheme::Sst.label(),
        kind: FieldKind::Weight,
        group: FieldGroup::Weighting,
        exposed: false,
    },
    FieldDef {
        id: FieldId::Correlation,
        label: "Generate correlation maps?",
        kind: FieldKind::Choice { options: &CORRELATION_OPTIONS },
        group: FieldGroup::Options,
        exposed: false,
    },
    FieldDef {
        id: FieldId::ManualMatch,
        label: "Manually choose match years?",
        kind: FieldKind::Choice { options: &MANUAL_MATCH_OPTIONS },
        group: FieldGroup::Matching,
        exposed: false,
    },
    FieldDef {
        id: FieldId::OverrideYear1,
        label: "Match year 1",
        kind: FieldKind::Year { min: EARLIEST_OVERRIDE_YEAR },
        group: FieldGroup::Matching,
        exposed: false,
    },
    FieldDef {
        id: FieldId::OverrideYear2,
        label: "Match year 2",
        kind: FieldKind::Year { min: EARLIEST_OVERRIDE_YEAR },
        group: FieldGroup::Matching,
        exposed: false,
    },
    FieldDef {
        id: FieldId::OverrideYear3,
        label: "Match year 3",
        kind: FieldKind::Year { min: EARLIEST_OVERRIDE_YEAR },
        group: FieldGroup::Matching,
        exposed: false,
    },
    FieldDef {
        id: FieldId::OverrideYear4,
        label: "Match year 4",
        kind: FieldKind::Year { min: EARLIEST_OVERRIDE_YEAR },
        group: FieldGroup::Matching,
        exposed: false,
    },
    FieldDef {
        id: FieldId::OverrideYear5,
        label: "Match year 5",
        kind: FieldKind::Year { min: EARLIEST_OVERRIDE_YEAR },
        group: FieldGroup::Matching,
        exposed: false,
    },
    FieldDef {
        id: FieldId::DetrendData,
        label: "Detrend data?",
        kind: FieldKind::Choice { options: &DETREND_OPTIONS },
        group: FieldGroup::Options,
        exposed: false,
    },
    FieldDef {
        id: FieldId::PressureHeight,
        label: "Pressure level for height",
        kind: FieldKind::PressureLevel { options: &PRESSURE_LEVELS },
        group: FieldGroup::Options,
        exposed: false,
    },
    FieldDef {
        id: FieldId::PressureTemp,
        label: "Pressure level for temp",
        kind: FieldKind::PressureLevel { options: &PRESSURE_LEVELS },
        group: FieldGroup::Options,
        exposed: false,
    },
];

/// A catalog entry as served to the front-end.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct FieldInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub group: FieldGroup,
    pub exposed: bool,
}

impl FieldDef {
    fn info(&self) -> FieldInfo {
        FieldInfo {
            key: self.id.wire_key(),
            label: self.label,
            kind: self.kind,
            group: self.group,
            exposed: self.exposed,
        }
    }
}

/// The catalog flattened to its served form, in declaration order.
pub fn field_catalog() -> Vec<FieldInfo> {
    CATALOG.iter().map(FieldDef::info).collect()
}

/// Catalog entries for the fields in `set`, in the set's order.
pub fn catalog_for(set: &FieldSet) -> Vec<FieldInfo> {
    set.iter()
        .filter_map(|id| CATALOG.iter().find(|def| def.id == id))
        .map(|def| def.info())
        .collect()
}

// ── Field sets ──────────────────────────────────────────────────

/// An ordered subset of the catalog, selecting which fields a tool variant
/// serializes. Iteration order is insertion order; inserting a field twice
/// keeps its first position, so a built query never repeats a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet(IndexSet<FieldId>);

impl FieldSet {
    /// Every catalog field, in declaration order.
    pub fn full() -> Self {
        Self(FieldId::ALL.iter().copied().collect())
    }

    pub fn from_ids(ids: impl IntoIterator<Item = FieldId>) -> Self {
        Self(ids.into_iter().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
