use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Spatial rectangle in degrees (N/W/E/S). Longitudes use the 0-360 domain
/// so a box can cross the antimeridian without splitting. Coordinates are
/// opaque to validation and pass through to the forecast API unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema, TS)]
#[ts(export)]
pub struct BoundingBox {
    pub north: f64,
    pub west: f64,
    pub east: f64,
    pub south: f64,
}

impl BoundingBox {
    /// Default analog search region (western Pacific).
    pub const ANALOG_DEFAULT: BoundingBox = BoundingBox {
        north: 20.0,
        west: 110.0,
        east: 140.0,
        south: 10.0,
    };

    /// Default forecast region (Alaska and surrounding waters).
    pub const FORECAST_DEFAULT: BoundingBox = BoundingBox {
        north: 72.0,
        west: 180.0,
        east: 230.0,
        south: 53.0,
    };
}
