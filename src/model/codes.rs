use serde::{Deserialize, Serialize};

/// Forecast variable themes, serialized as their numeric wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ForecastTheme {
    Slp,
    PressureHeight,
    TwoMeterTemps,
    PressureTemp,
    Sst,
    Precip,
}

impl ForecastTheme {
    pub const fn code(&self) -> u8 {
        match self {
            Self::Slp => 1,
            Self::PressureHeight => 2,
            Self::TwoMeterTemps => 3,
            Self::PressureTemp => 4,
            Self::Sst => 5,
            Self::Precip => 6,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Slp => "SLP",
            Self::PressureHeight => "Pressure level height",
            Self::TwoMeterTemps => "2-meter temps",
            Self::PressureTemp => "Pressure level temp",
            Self::Sst => "SST",
            Self::Precip => "Precip",
        }
    }

    pub fn all() -> &'static [ForecastTheme] {
        &[
            Self::Slp,
            Self::PressureHeight,
            Self::TwoMeterTemps,
            Self::PressureTemp,
            Self::Sst,
            Self::Precip,
        ]
    }

    /// The variables that carry match weights, in manual-weight slot order.
    /// Precip is composited from the others and is never weighted itself.
    pub fn weighted() -> &'static [ForecastTheme] {
        &[
            Self::Slp,
            Self::PressureHeight,
            Self::TwoMeterTemps,
            Self::PressureTemp,
            Self::Sst,
        ]
    }
}

impl From<ForecastTheme> for u8 {
    fn from(theme: ForecastTheme) -> u8 {
        theme.code()
    }
}

impl TryFrom<u8> for ForecastTheme {
    type Error = String;
    fn try_from(code: u8) -> Result<Self, String> {
        ForecastTheme::all()
            .iter()
            .find(|theme| theme.code() == code)
            .copied()
            .ok_or_else(|| format!("unknown forecast theme code: {code}"))
    }
}

/// Correlation map rendering modes, serialized as their numeric wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CorrelationMode {
    None,
    RValueMaps,
    R2ValueMaps,
    MultipleR,
}

impl CorrelationMode {
    pub const fn code(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::RValueMaps => 1,
            Self::R2ValueMaps => 2,
            Self::MultipleR => 3,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "No",
            Self::RValueMaps => "R-Value Maps",
            Self::R2ValueMaps => "R2-Value Maps",
            Self::MultipleR => "Multiple R Correlation",
        }
    }

    pub fn all() -> &'static [CorrelationMode] {
        &[Self::None, Self::RValueMaps, Self::R2ValueMaps, Self::MultipleR]
    }
}

impl From<CorrelationMode> for u8 {
    fn from(mode: CorrelationMode) -> u8 {
        mode.code()
    }
}

impl TryFrom<u8> for CorrelationMode {
    type Error = String;
    fn try_from(code: u8) -> Result<Self, String> {
        CorrelationMode::all()
            .iter()
            .find(|mode| mode.code() == code)
            .copied()
            .ok_or_else(|| format!("unknown correlation mode code: {code}"))
    }
}

/// Whether match weights are assigned automatically or taken from the five
/// manual weight fields. Wire code: 1 = automatic, 0 = manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum WeightMode {
    Manual,
    Automatic,
}

impl WeightMode {
    pub const fn code(&self) -> u8 {
        match self {
            Self::Manual => 0,
            Self::Automatic => 1,
        }
    }
}

impl From<WeightMode> for u8 {
    fn from(mode: WeightMode) -> u8 {
        mode.code()
    }
}

impl TryFrom<u8> for WeightMode {
    type Error = String;
    fn try_from(code: u8) -> Result<Self, String> {
        match code {
            0 => Ok(Self::Manual),
            1 => Ok(Self::Automatic),
            other => Err(format!("unknown auto-weight code: {other}")),
        }
    }
}

/// Whether analog match years are found automatically or overridden with the
/// five manually chosen years. Wire code: 0 = automatic, 1 = manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MatchMode {
    Automatic,
    Manual,
}

impl MatchMode {
    pub const fn code(&self) -> u8 {
        match self {
            Self::Automatic => 0,
            Self::Manual => 1,
        }
    }
}

impl From<MatchMode> for u8 {
    fn from(mode: MatchMode) -> u8 {
        mode.code()
    }
}

impl TryFrom<u8> for MatchMode {
    type Error = String;
    fn try_from(code: u8) -> Result<Self, String> {
        match code {
            0 => Ok(Self::Automatic),
            1 => Ok(Self::Manual),
            other => Err(format!("unknown manual-match code: {other}")),
        }
    }
}

/// Whether source data is detrended before matching. Wire code: 0 = no, 1 = yes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DetrendFlag {
    No,
    Yes,
}

impl DetrendFlag {
    pub const fn code(&self) -> u8 {
        match self {
            Self::No => 0,
            Self::Yes => 1,
        }
    }
}

impl From<DetrendFlag> for u8 {
    fn from(flag: DetrendFlag) -> u8 {
        flag.code()
    }
}

impl TryFrom<u8> for DetrendFlag {
    type Error = String;
    fn try_from(code: u8) -> Result<Self, String> {
        match code {
            0 => Ok(Self::No),
            1 => Ok(Self::Yes),
            other => Err(format!("unknown detrend code: {other}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn themes_serialize_as_their_wire_code() {
        assert_eq!(serde_json::to_string(&ForecastTheme::TwoMeterTemps).unwrap(), "3");
        assert_eq!(serde_json::to_string(&ForecastTheme::Precip).unwrap(), "6");
    }

    #[test]
    fn themes_deserialize_from_their_wire_code() {
        let theme: ForecastTheme = serde_json::from_str("5").unwrap();
        assert_eq!(theme, ForecastTheme::Sst);
        assert!(serde_json::from_str::<ForecastTheme>("0").is_err());
        assert!(serde_json::from_str::<ForecastTheme>("7").is_err());
    }

    #[test]
    fn weighted_themes_fill_the_five_manual_weight_slots() {
        let weighted = ForecastTheme::weighted();
        assert_eq!(weighted.len(), 5);
        assert_eq!(weighted.first().map(|t| t.label()), Some("SLP"));
        assert!(!weighted.contains(&ForecastTheme::Precip));
    }

    #[test]
    fn flag_codes_match_the_wire_convention() {
        assert_eq!(WeightMode::Automatic.code(), 1);
        assert_eq!(WeightMode::Manual.code(), 0);
        assert_eq!(MatchMode::Automatic.code(), 0);
        assert_eq!(MatchMode::Manual.code(), 1);
        assert_eq!(DetrendFlag::No.code(), 0);
        assert_eq!(DetrendFlag::Yes.code(), 1);
    }

    #[test]
    fn correlation_codes_round_trip() {
        for mode in CorrelationMode::all() {
            let json = serde_json::to_string(mode).unwrap();
            let back: CorrelationMode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *mode);
        }
    }
}
