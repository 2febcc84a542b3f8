//! Weather formula evaluator for WeatherLab
//!
//! Maps eight atmospheric physics inputs to ten weather metrics through a
//! fixed pipeline of closed-form formulas. Pure and stateless: identical
//! inputs always give identical outputs.

pub mod compare;
pub mod constants;
pub mod engine;
pub mod formulas;
pub mod types;

pub use compare::{compare, Comparison, Metric, MetricDelta, Trend};
pub use engine::{evaluate, evaluate_raw, RawWeather};
pub use types::*;
