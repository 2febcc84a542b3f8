use serde::{Deserialize, Serialize};

/// Physics inputs driving the weather model. One value per slider.
///
/// Every field is required when deserializing; a missing or non-numeric
/// field is a parse error, which is how malformed requests are rejected
/// before they reach the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsParameters {
    /// Gravity multiplier relative to Earth (1.0 = 9.81 m/s²)
    pub gravity: f64,
    /// Atmospheric density in kg/m³
    pub air_density: f64,
    /// Atmospheric pressure in hPa
    pub pressure: f64,
    /// CO₂ concentration in ppm
    pub co2: f64,
    /// Solar irradiance multiplier
    pub sunlight: f64,
    /// Cloud condensation nuclei multiplier
    pub cloud_condensation: f64,
    /// Aerodynamic drag multiplier
    pub wind_drag: f64,
    /// Relative humidity (%)
    pub humidity: f64,
}

impl PhysicsParameters {
    /// Earth-normal conditions
    pub const EARTH: Self = Self {
        gravity: 1.0,
        air_density: 1.225,
        pressure: 1013.0,
        co2: 400.0,
        sunlight: 1.0,
        cloud_condensation: 1.0,
        wind_drag: 1.0,
        humidity: 60.0,
    };

    /// Return a copy with a single parameter replaced.
    pub fn with(self, parameter: Parameter, value: f64) -> Self {
        let mut next = self;
        match parameter {
            Parameter::Gravity => next.gravity = value,
            Parameter::AirDensity => next.air_density = value,
            Parameter::Pressure => next.pressure = value,
            Parameter::Co2 => next.co2 = value,
            Parameter::Sunlight => next.sunlight = value,
            Parameter::CloudCondensation => next.cloud_condensation = value,
            Parameter::WindDrag => next.wind_drag = value,
            Parameter::Humidity => next.humidity = value,
        }
        next
    }

    /// List every parameter whose value lies outside its designated range.
    ///
    /// The evaluator never consults this; it exists so callers can warn
    /// about inputs the formulas were not tuned for.
    pub fn out_of_range(&self) -> Vec<RangeViolation> {
        Parameter::ALL
            .iter()
            .filter_map(|&parameter| {
                let value = parameter.value_in(self);
                let range = parameter.range();
                (!range.contains(value)).then_some(RangeViolation {
                    parameter,
                    value,
                    min: range.min,
                    max: range.max,
                })
            })
            .collect()
    }
}

impl Default for PhysicsParameters {
    fn default() -> Self {
        Self::EARTH
    }
}

/// Identifies one of the eight physics inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Parameter {
    Gravity,
    AirDensity,
    Pressure,
    Co2,
    Sunlight,
    CloudCondensation,
    WindDrag,
    Humidity,
}

impl Parameter {
    /// All parameters in slider order
    pub const ALL: [Parameter; 8] = [
        Parameter::Gravity,
        Parameter::AirDensity,
        Parameter::Pressure,
        Parameter::Co2,
        Parameter::Sunlight,
        Parameter::CloudCondensation,
        Parameter::WindDrag,
        Parameter::Humidity,
    ];

    /// JSON field name
    pub fn key(&self) -> &'static str {
        match self {
            Self::Gravity => "gravity",
            Self::AirDensity => "airDensity",
            Self::Pressure => "pressure",
            Self::Co2 => "co2",
            Self::Sunlight => "sunlight",
            Self::CloudCondensation => "cloudCondensation",
            Self::WindDrag => "windDrag",
            Self::Humidity => "humidity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Gravity => "Gravity",
            Self::AirDensity => "Air Density",
            Self::Pressure => "Pressure",
            Self::Co2 => "CO₂",
            Self::Sunlight => "Sunlight",
            Self::CloudCondensation => "Cloud Condensation",
            Self::WindDrag => "Wind Drag",
            Self::Humidity => "Humidity",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Gravity | Self::Sunlight | Self::CloudCondensation | Self::WindDrag => "x",
            Self::AirDensity => "kg/m³",
            Self::Pressure => "hPa",
            Self::Co2 => "ppm",
            Self::Humidity => "%",
        }
    }

    /// Designated slider range
    pub fn range(&self) -> ParamRange {
        match self {
            Self::Gravity => ParamRange::new(0.1, 3.0, 0.1),
            Self::AirDensity => ParamRange::new(0.1, 2.0, 0.05),
            Self::Pressure => ParamRange::new(500.0, 1500.0, 10.0),
            Self::Co2 => ParamRange::new(200.0, 2000.0, 50.0),
            Self::Sunlight => ParamRange::new(0.5, 2.0, 0.1),
            Self::CloudCondensation => ParamRange::new(0.5, 2.0, 0.1),
            Self::WindDrag => ParamRange::new(0.1, 2.0, 0.1),
            Self::Humidity => ParamRange::new(0.0, 100.0, 5.0),
        }
    }

    pub fn earth_default(&self) -> f64 {
        self.value_in(&PhysicsParameters::EARTH)
    }

    pub fn value_in(&self, params: &PhysicsParameters) -> f64 {
        match self {
            Self::Gravity => params.gravity,
            Self::AirDensity => params.air_density,
            Self::Pressure => params.pressure,
            Self::Co2 => params.co2,
            Self::Sunlight => params.sunlight,
            Self::CloudCondensation => params.cloud_condensation,
            Self::WindDrag => params.wind_drag,
            Self::Humidity => params.humidity,
        }
    }

    pub fn spec(&self) -> ParameterSpec {
        let range = self.range();
        ParameterSpec {
            key: self.key(),
            label: self.label(),
            unit: self.unit(),
            min: range.min,
            max: range.max,
            step: range.step,
            default: self.earth_default(),
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Inclusive slider range with step size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Catalogue entry describing a parameter to clients that build sliders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// Catalogue of every parameter in slider order
pub fn parameter_catalogue() -> Vec<ParameterSpec> {
    Parameter::ALL.iter().map(Parameter::spec).collect()
}

/// A parameter value outside its designated range
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("{parameter} = {value} is outside {min}..={max}")]
pub struct RangeViolation {
    pub parameter: Parameter,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// Derived weather metrics, rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherOutput {
    /// Surface temperature (°C)
    pub temperature: f64,
    /// Cloud base altitude (m)
    pub cloud_altitude: f64,
    /// Chance of precipitation (0-100)
    pub precipitation_chance: f64,
    /// Wind speed (km/h)
    pub wind_speed: f64,
    /// Evaporation (mm/day)
    pub evaporation_rate: f64,
    /// Chance of storm conditions (0-100)
    pub storm_probability: f64,
    /// Feels-like temperature (°C)
    pub heat_index: f64,
    /// Visibility (km)
    pub visibility: f64,
    /// Dew point (°C)
    pub dew_point: f64,
    /// Human comfort score (0-100, 100 is ideal)
    pub comfort_index: u8,
}

/// Temperature categories used for colour-coding readouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    Freezing,
    Cold,
    Mild,
    Warm,
    Hot,
}

impl TemperatureBand {
    pub fn from_celsius(temperature: f64) -> Self {
        if temperature < 0.0 {
            Self::Freezing
        } else if temperature < 10.0 {
            Self::Cold
        } else if temperature < 20.0 {
            Self::Mild
        } else if temperature < 30.0 {
            Self::Warm
        } else {
            Self::Hot
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Freezing => "Freezing",
            Self::Cold => "Cold",
            Self::Mild => "Mild",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
        }
    }
}
