//! Side-by-side comparison of modified physics against Earth.

use serde::{Deserialize, Serialize};

use crate::engine::evaluate;
use crate::types::{PhysicsParameters, WeatherOutput};

/// Differences smaller than this are reported as steady
pub const STEADY_THRESHOLD: f64 = 0.1;

/// One of the ten weather metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Temperature,
    CloudAltitude,
    PrecipitationChance,
    WindSpeed,
    EvaporationRate,
    StormProbability,
    HeatIndex,
    Visibility,
    DewPoint,
    ComfortIndex,
}

impl Metric {
    pub const ALL: [Metric; 10] = [
        Metric::Temperature,
        Metric::CloudAltitude,
        Metric::PrecipitationChance,
        Metric::WindSpeed,
        Metric::EvaporationRate,
        Metric::StormProbability,
        Metric::HeatIndex,
        Metric::Visibility,
        Metric::DewPoint,
        Metric::ComfortIndex,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::CloudAltitude => "Cloud Altitude",
            Self::PrecipitationChance => "Rain Chance",
            Self::WindSpeed => "Wind Speed",
            Self::EvaporationRate => "Evaporation",
            Self::StormProbability => "Storm Risk",
            Self::HeatIndex => "Heat Index",
            Self::Visibility => "Visibility",
            Self::DewPoint => "Dew Point",
            Self::ComfortIndex => "Comfort",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Temperature | Self::HeatIndex | Self::DewPoint => "°C",
            Self::CloudAltitude => "m",
            Self::PrecipitationChance | Self::StormProbability => "%",
            Self::WindSpeed => "km/h",
            Self::EvaporationRate => "mm/day",
            Self::Visibility => "km",
            Self::ComfortIndex => "/100",
        }
    }

    pub fn value_in(&self, output: &WeatherOutput) -> f64 {
        match self {
            Self::Temperature => output.temperature,
            Self::CloudAltitude => output.cloud_altitude,
            Self::PrecipitationChance => output.precipitation_chance,
            Self::WindSpeed => output.wind_speed,
            Self::EvaporationRate => output.evaporation_rate,
            Self::StormProbability => output.storm_probability,
            Self::HeatIndex => output.heat_index,
            Self::Visibility => output.visibility,
            Self::DewPoint => output.dew_point,
            Self::ComfortIndex => f64::from(output.comfort_index),
        }
    }
}

/// Direction of change relative to Earth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Steady,
}

impl Trend {
    pub fn from_difference(difference: f64) -> Self {
        if difference.abs() < STEADY_THRESHOLD {
            Self::Steady
        } else if difference > 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDelta {
    pub metric: Metric,
    pub earth: f64,
    pub modified: f64,
    pub difference: f64,
    pub trend: Trend,
}

/// Earth baseline, modified outcome and per-metric differences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub earth: WeatherOutput,
    pub modified: WeatherOutput,
    pub parameters: PhysicsParameters,
    pub deltas: Vec<MetricDelta>,
}

/// Evaluate Earth defaults and `modified` side by side.
pub fn compare(modified: PhysicsParameters) -> Comparison {
    let earth_output = evaluate(PhysicsParameters::EARTH);
    let modified_output = evaluate(modified);

    let deltas = Metric::ALL
        .iter()
        .map(|&metric| {
            let earth = metric.value_in(&earth_output);
            let changed = metric.value_in(&modified_output);
            let difference = changed - earth;
            MetricDelta {
                metric,
                earth,
                modified: changed,
                difference,
                trend: Trend::from_difference(difference),
            }
        })
        .collect();

    Comparison {
        earth: earth_output,
        modified: modified_output,
        parameters: modified,
        deltas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Parameter;

    #[test]
    fn test_earth_against_itself_is_steady() {
        let comparison = compare(PhysicsParameters::EARTH);
        assert_eq!(comparison.earth, comparison.modified);
        assert_eq!(comparison.deltas.len(), 10);
        assert!(comparison.deltas.iter().all(|d| d.trend == Trend::Steady));
    }

    #[test]
    fn test_more_sunlight_warms() {
        let comparison = compare(PhysicsParameters::EARTH.with(Parameter::Sunlight, 1.5));
        let temp = comparison.deltas[0];
        assert_eq!(temp.metric, Metric::Temperature);
        assert_eq!(temp.trend, Trend::Up);
        assert!((temp.difference - 7.5).abs() < 0.11);
    }

    #[test]
    fn test_denser_air_slows_wind() {
        let comparison = compare(PhysicsParameters::EARTH.with(Parameter::AirDensity, 2.0));
        let wind = comparison
            .deltas
            .iter()
            .find(|d| d.metric == Metric::WindSpeed)
            .unwrap();
        assert_eq!(wind.trend, Trend::Down);
    }

    #[test]
    fn test_trend_threshold() {
        assert_eq!(Trend::from_difference(0.05), Trend::Steady);
        assert_eq!(Trend::from_difference(-0.09), Trend::Steady);
        assert_eq!(Trend::from_difference(0.1), Trend::Up);
        assert_eq!(Trend::from_difference(-1.0), Trend::Down);
    }

    #[test]
    fn test_metric_units() {
        assert_eq!(Metric::WindSpeed.unit(), "km/h");
        assert_eq!(Metric::PrecipitationChance.label(), "Rain Chance");
    }
}
