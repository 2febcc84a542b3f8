//! Reference values the weather formulas are calibrated against.

/// Sea-level pressure on Earth (hPa)
pub const BASE_PRESSURE: f64 = 1013.0;
/// Sea-level air density on Earth (kg/m³)
pub const BASE_AIR_DENSITY: f64 = 1.225;
/// Surface temperature before any adjustment (°C)
pub const BASE_TEMPERATURE: f64 = 15.0;
/// Pre-industrial-ish CO₂ reference (ppm)
pub const BASE_CO2: f64 = 400.0;
/// Reference relative humidity (%)
pub const BASE_HUMIDITY: f64 = 60.0;

/// Meters of cloud base per degree of temperature/dew-point spread
pub const CLOUD_HEIGHT_FACTOR: f64 = 125.0;
/// Calm-day wind speed (km/h)
pub const BASE_WIND_SPEED: f64 = 15.0;
/// Rain rate at reference conditions (mm/day)
pub const BASE_RAIN_RATE: f64 = 5.0;
/// Evaporation at reference conditions (mm/day)
pub const BASE_EVAPORATION: f64 = 4.0;
/// Storm chance at reference conditions (%)
pub const BASE_STORM_CHANCE: f64 = 20.0;

// Magnus formula coefficients
pub const MAGNUS_A: f64 = 17.27;
pub const MAGNUS_B: f64 = 237.7;

/// Below this temperature (°C) the heat index is the air temperature itself
pub const HEAT_INDEX_THRESHOLD: f64 = 27.0;

pub const MIN_VISIBILITY_KM: f64 = 0.5;
pub const MAX_VISIBILITY_KM: f64 = 50.0;

// Ideal conditions for the comfort score
pub const IDEAL_TEMPERATURE: f64 = 22.0;
pub const IDEAL_HUMIDITY: f64 = 50.0;
pub const IDEAL_PRESSURE: f64 = 1013.0;
