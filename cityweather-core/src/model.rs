use serde::{Deserialize, Serialize};

/// One lookup, created when the trigger fires and consumed immediately.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub city: String,
}

/// Parsed weather data for one city at one point in time.
///
/// Only ever constructed from a success response; a not-found response
/// never produces a reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city_name: String,
    pub temperature_c: f64,
    pub description: String,
    pub humidity_pct: u8,
}
