pub mod bacterial;
pub mod cold_stress;
pub mod engine;
pub mod fungal;
pub mod heat_stress;
pub mod optimal;

pub use engine::WeatherRiskEngine;

use crate::models::{WeatherConditions, WeatherRisk};

/// Trait for weather-driven disease risk rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return a risk if conditions are met
    fn evaluate(&self, conditions: &WeatherConditions) -> Option<WeatherRisk>;
}
