//! The evaluation pipeline.
//!
//! Formulas run in a fixed order because later steps read earlier results:
//! temperature feeds dew point, cloud altitude, evaporation, storms, heat
//! index, visibility and comfort; wind speed feeds storms and comfort.
//! Rounding is applied once, after every value has been computed.

use serde::Serialize;

use crate::formulas;
use crate::types::{PhysicsParameters, WeatherOutput};

/// Full-precision pipeline results, before display rounding
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWeather {
    pub temperature: f64,
    pub dew_point: f64,
    pub cloud_altitude: f64,
    pub wind_speed: f64,
    pub precipitation_chance: f64,
    pub evaporation_rate: f64,
    pub storm_probability: f64,
    pub heat_index: f64,
    pub visibility: f64,
    pub comfort_score: f64,
}

impl RawWeather {
    /// Apply display rounding: one decimal place for most metrics, whole
    /// numbers for cloud altitude, precipitation, storms and comfort.
    pub fn rounded(&self) -> WeatherOutput {
        WeatherOutput {
            temperature: round_to_tenth(self.temperature),
            cloud_altitude: round_half_up(self.cloud_altitude),
            precipitation_chance: round_half_up(self.precipitation_chance),
            wind_speed: round_to_tenth(self.wind_speed),
            evaporation_rate: round_to_tenth(self.evaporation_rate),
            storm_probability: round_half_up(self.storm_probability),
            heat_index: round_to_tenth(self.heat_index),
            visibility: round_to_tenth(self.visibility),
            dew_point: round_to_tenth(self.dew_point),
            // Saturating cast: NaN becomes 0
            comfort_index: round_half_up(self.comfort_score) as u8,
        }
    }

    /// True when every value is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.temperature,
            self.dew_point,
            self.cloud_altitude,
            self.wind_speed,
            self.precipitation_chance,
            self.evaporation_rate,
            self.storm_probability,
            self.heat_index,
            self.visibility,
            self.comfort_score,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Compute the weather produced by a set of physics parameters.
pub fn evaluate(params: PhysicsParameters) -> WeatherOutput {
    evaluate_raw(&params).rounded()
}

/// Run the pipeline without the final rounding step.
pub fn evaluate_raw(params: &PhysicsParameters) -> RawWeather {
    let temperature = formulas::temperature(
        params.co2,
        params.air_density,
        params.sunlight,
        params.pressure,
    );

    let dew_point = formulas::dew_point(temperature, params.humidity);

    let cloud_altitude = formulas::cloud_altitude(temperature, dew_point, params.gravity);

    let wind_speed = formulas::wind_speed(params.air_density, params.wind_drag, params.pressure);

    let precipitation_chance = formulas::precipitation_chance(formulas::rainfall(
        params.gravity,
        params.pressure,
        params.humidity,
        params.cloud_condensation,
    ));

    let evaporation_rate = formulas::evaporation_rate(
        params.humidity,
        params.sunlight,
        params.gravity,
        temperature,
    );

    let storm_probability =
        formulas::storm_probability(params.humidity, params.pressure, temperature, wind_speed);

    let heat_index = formulas::heat_index(temperature, params.humidity);

    let visibility = formulas::visibility(params.humidity, params.air_density, temperature);

    let comfort_score =
        formulas::comfort_score(temperature, params.humidity, wind_speed, params.pressure);

    RawWeather {
        temperature,
        dew_point,
        cloud_altitude,
        wind_speed,
        precipitation_chance,
        evaporation_rate,
        storm_probability,
        heat_index,
        visibility,
        comfort_score,
    }
}

/// Round to the nearest integer with exact halves going up (-2.5 becomes -2).
///
/// Works on the exact fractional part, so values just under a half
/// (0.49999999999999994) round down and integers beyond 2^52 are unchanged.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to one decimal place, halves going up.
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(973.44), 973.0);
    }

    #[test]
    fn test_round_half_up_edges() {
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        let big = 4_503_599_627_370_497.0; // 2^52 + 1
        assert_eq!(round_half_up(big), big);
        assert!(round_half_up(f64::NAN).is_nan());
        assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(16.3875), 16.4);
        assert_eq!(round_to_tenth(12.244_897), 12.2);
        assert_eq!(round_to_tenth(-0.04), 0.0);
    }

    #[test]
    fn test_rounding_happens_after_pipeline() {
        let raw = evaluate_raw(&PhysicsParameters::EARTH);
        // dew point derives from the unrounded 16.3875, not 16.4
        let from_rounded = crate::formulas::dew_point(16.4, 60.0);
        assert!((raw.dew_point - from_rounded).abs() > 1e-6);
        assert_eq!(raw.rounded().dew_point, round_to_tenth(raw.dew_point));
    }

    #[test]
    fn test_nan_comfort_saturates_to_zero() {
        let raw = RawWeather {
            temperature: 0.0,
            dew_point: 0.0,
            cloud_altitude: 0.0,
            wind_speed: 0.0,
            precipitation_chance: 0.0,
            evaporation_rate: 0.0,
            storm_probability: 0.0,
            heat_index: 0.0,
            visibility: 0.5,
            comfort_score: f64::NAN,
        };
        assert_eq!(raw.rounded().comfort_index, 0);
        assert!(!raw.is_finite());
    }

    #[test]
    fn test_earth_raw_values_are_finite() {
        assert!(evaluate_raw(&PhysicsParameters::EARTH).is_finite());
    }
}
