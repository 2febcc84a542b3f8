//! Individual weather formulas.
//!
//! Each function is a closed-form expression over raw inputs and, where
//! noted, values computed earlier in the pipeline. None of them clamp their
//! inputs: out-of-domain values propagate as NaN or infinities. The output
//! bounds that do exist let NaN through rather than replacing it.

use crate::constants::*;

/// `value` floored at zero; NaN stays NaN.
fn at_least_zero(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Surface temperature (°C) from greenhouse, density, sunlight and pressure effects.
pub fn temperature(co2: f64, air_density: f64, sunlight: f64, pressure: f64) -> f64 {
    let co2_effect = (co2 / BASE_CO2) * 2.0;
    let density_effect = air_density * 0.5;
    // ±15°C per unit of sunlight
    let sunlight_effect = (sunlight - 1.0) * 15.0;
    let pressure_effect = ((pressure - BASE_PRESSURE) / BASE_PRESSURE) * 5.0;

    BASE_TEMPERATURE + co2_effect - density_effect + sunlight_effect + pressure_effect
}

/// Dew point (°C) by inverting the Magnus formula.
///
/// Undefined at zero humidity: `ln(0)` is `-inf` and the result is NaN.
pub fn dew_point(temperature: f64, humidity: f64) -> f64 {
    let alpha = (MAGNUS_A * temperature) / (MAGNUS_B + temperature) + (humidity / 100.0).ln();
    (MAGNUS_B * alpha) / (MAGNUS_A - alpha)
}

/// Cloud base altitude (m), approximating the lifting condensation level.
///
/// Lower gravity means a less compressed atmosphere, so clouds form higher.
pub fn cloud_altitude(temperature: f64, dew_point: f64, gravity: f64) -> f64 {
    let base_height = (temperature - dew_point) * CLOUD_HEIGHT_FACTOR;
    base_height * (1.0 / gravity)
}

/// Wind speed (km/h). Thin air and pressure anomalies both speed it up.
pub fn wind_speed(air_density: f64, wind_drag: f64, pressure: f64) -> f64 {
    let density_effect = 1.0 / air_density;
    let pressure_effect = (pressure - BASE_PRESSURE).abs() / BASE_PRESSURE;

    BASE_WIND_SPEED * density_effect * wind_drag * (1.0 + pressure_effect)
}

/// Rainfall rate at the given conditions (approximate mm/hour).
pub fn rainfall(gravity: f64, pressure: f64, humidity: f64, cloud_condensation: f64) -> f64 {
    // heavier gravity, faster droplets
    let gravity_effect = gravity.powf(0.4);
    let pressure_effect = pressure / BASE_PRESSURE;
    let humidity_effect = humidity / 100.0;

    BASE_RAIN_RATE * gravity_effect * pressure_effect * humidity_effect * cloud_condensation
}

/// Chance of precipitation, capped at 100. There is no lower clamp.
pub fn precipitation_chance(rainfall: f64) -> f64 {
    let chance = rainfall * 10.0;
    if chance > 100.0 {
        100.0
    } else {
        chance
    }
}

/// Evaporation rate (mm/day).
pub fn evaporation_rate(humidity: f64, sunlight: f64, gravity: f64, temperature: f64) -> f64 {
    let humidity_effect = (100.0 - humidity) / 100.0;
    let gravity_effect = 1.0 / gravity;
    let temp_effect = if temperature > 0.0 {
        1.0 + temperature / 100.0
    } else {
        0.5
    };

    BASE_EVAPORATION * humidity_effect * sunlight * gravity_effect * temp_effect
}

/// Storm probability (0-100). Depends on the wind speed computed earlier.
pub fn storm_probability(humidity: f64, pressure: f64, temperature: f64, wind_speed: f64) -> f64 {
    let humidity_effect = humidity / 100.0;
    // low pressure breeds storms
    let pressure_effect = if pressure < BASE_PRESSURE { 1.5 } else { 0.8 };
    let temp_effect = (temperature - 20.0).abs() / 20.0;
    let wind_effect = wind_speed / BASE_WIND_SPEED;

    let probability =
        BASE_STORM_CHANCE * humidity_effect * pressure_effect * (1.0 + temp_effect) * wind_effect;
    probability.clamp(0.0, 100.0)
}

/// Feels-like temperature (°C) using the Rothfusz regression above 27°C.
///
/// The two branches do not meet at the threshold: at 60% humidity the
/// regression gives about 28.1°C at exactly 27°C.
pub fn heat_index(temperature: f64, humidity: f64) -> f64 {
    if temperature < HEAT_INDEX_THRESHOLD {
        return temperature;
    }

    let t = temperature;
    let rh = humidity;

    -8.78469475556 + 1.61139411 * t + 2.33854883889 * rh
        - 0.14611605 * t * rh
        - 0.012308094 * t * t
        - 0.0164248277778 * rh * rh
        + 0.002211732 * t * t * rh
        + 0.00072546 * t * rh * rh
        - 0.000003582 * t * t * rh * rh
}

/// Visibility (km), kept within 0.5..=50.
pub fn visibility(humidity: f64, air_density: f64, temperature: f64) -> f64 {
    let humidity_effect = (100.0 - humidity) / 100.0;
    let density_effect = 1.0 / air_density;
    // inversions below freezing
    let temp_effect = if temperature > 0.0 { 1.0 } else { 0.7 };

    let visibility = 10.0 * humidity_effect * density_effect * temp_effect;
    visibility.clamp(MIN_VISIBILITY_KM, MAX_VISIBILITY_KM)
}

/// Unrounded comfort score out of 100.
///
/// Temperature contributes up to 40 points, humidity 30, wind 20 and
/// pressure 10.
pub fn comfort_score(temperature: f64, humidity: f64, wind_speed: f64, pressure: f64) -> f64 {
    let temp_score = at_least_zero(40.0 - (temperature - IDEAL_TEMPERATURE).abs() * 2.0);
    let humidity_score = at_least_zero(30.0 - (humidity - IDEAL_HUMIDITY).abs() * 0.6);
    let wind_score = if wind_speed < 20.0 {
        20.0 - wind_speed * 0.5
    } else {
        at_least_zero(20.0 - (wind_speed - 20.0))
    };
    let pressure_score = at_least_zero(10.0 - (pressure - IDEAL_PRESSURE).abs() * 0.01);

    temp_score + humidity_score + wind_score + pressure_score
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_temperature_at_earth_defaults() {
        let t = temperature(400.0, 1.225, 1.0, 1013.0);
        assert!((t - 16.3875).abs() < EPS);
    }

    #[test]
    fn test_temperature_sunlight_is_fifteen_degrees_per_unit() {
        let base = temperature(400.0, 1.225, 1.0, 1013.0);
        let bright = temperature(400.0, 1.225, 2.0, 1013.0);
        assert!((bright - base - 15.0).abs() < EPS);
    }

    #[test]
    fn test_dew_point_equals_temperature_at_saturation() {
        let dp = dew_point(20.0, 100.0);
        assert!((dp - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_dew_point_at_zero_humidity_is_nan() {
        assert!(dew_point(16.0, 0.0).is_nan());
    }

    #[test]
    fn test_cloud_altitude_scales_inversely_with_gravity() {
        let earth = cloud_altitude(16.0, 8.0, 1.0);
        let light = cloud_altitude(16.0, 8.0, 0.5);
        assert!((earth - 1000.0).abs() < EPS);
        assert!((light - 2000.0).abs() < EPS);
    }

    #[test]
    fn test_wind_speed_symmetric_in_pressure_anomaly() {
        let low = wind_speed(1.0, 1.0, 913.0);
        let high = wind_speed(1.0, 1.0, 1113.0);
        assert!((low - high).abs() < EPS);
        assert!((wind_speed(1.0, 1.0, 1013.0) - 15.0).abs() < EPS);
    }

    #[test]
    fn test_precipitation_capped_at_100() {
        assert_eq!(precipitation_chance(25.0), 100.0);
        assert!((precipitation_chance(3.0) - 30.0).abs() < EPS);
    }

    #[test]
    fn test_evaporation_below_freezing_uses_half_effect() {
        let cold = evaporation_rate(50.0, 1.0, 1.0, -5.0);
        assert!((cold - 4.0 * 0.5 * 0.5).abs() < EPS);
        let warm = evaporation_rate(50.0, 1.0, 1.0, 10.0);
        assert!((warm - 4.0 * 0.5 * 1.1).abs() < EPS);
    }

    #[test]
    fn test_storm_probability_low_pressure_boost() {
        let low = storm_probability(60.0, 1000.0, 20.0, 15.0);
        let high = storm_probability(60.0, 1013.0, 20.0, 15.0);
        assert!((low - 18.0).abs() < EPS);
        assert!((high - 9.6).abs() < EPS);
    }

    #[test]
    fn test_storm_probability_clamped() {
        assert_eq!(storm_probability(100.0, 500.0, 60.0, 400.0), 100.0);
        assert_eq!(storm_probability(0.0, 1013.0, 20.0, 15.0), 0.0);
    }

    #[test]
    fn test_heat_index_below_threshold_is_identity() {
        assert_eq!(heat_index(26.9, 90.0), 26.9);
    }

    #[test]
    fn test_heat_index_seam_discontinuity() {
        // Known jump at the 27°C threshold; not smoothed.
        let just_below = heat_index(26.999_999, 60.0);
        let at = heat_index(27.0, 60.0);
        assert!((at - 28.0812).abs() < 1e-3);
        assert!((at - just_below) > 1.0 && (at - just_below) < 1.2);
    }

    #[test]
    fn test_visibility_clamped() {
        assert_eq!(visibility(100.0, 1.225, 20.0), 0.5);
        assert_eq!(visibility(0.0, 0.1, 20.0), 50.0);
    }

    #[test]
    fn test_visibility_freezing_penalty() {
        let warm = visibility(50.0, 1.0, 5.0);
        let cold = visibility(50.0, 1.0, -5.0);
        assert!((warm - 5.0).abs() < EPS);
        assert!((cold - 3.5).abs() < EPS);
    }

    #[test]
    fn test_comfort_score_ideal_conditions() {
        // Perfect temperature, humidity and pressure; calm wind.
        let score = comfort_score(22.0, 50.0, 0.0, 1013.0);
        assert!((score - 100.0).abs() < EPS);
    }

    #[test]
    fn test_comfort_score_wind_branches() {
        let breezy = comfort_score(22.0, 50.0, 10.0, 1013.0);
        let gale = comfort_score(22.0, 50.0, 30.0, 1013.0);
        let storm = comfort_score(22.0, 50.0, 60.0, 1013.0);
        assert!((breezy - 95.0).abs() < EPS);
        assert!((gale - 90.0).abs() < EPS);
        assert!((storm - 80.0).abs() < EPS);
    }
}
