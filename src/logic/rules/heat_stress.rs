use super::Rule;
use crate::models::{RiskLevel, WeatherConditions, WeatherRisk};

/// Heat stress warning - above 35°C plants are stressed and more
/// susceptible to disease.
pub struct HeatStressRule;

impl Rule for HeatStressRule {
    fn id(&self) -> &'static str {
        "heat_stress"
    }

    fn name(&self) -> &'static str {
        "Heat Stress"
    }

    fn evaluate(&self, conditions: &WeatherConditions) -> Option<WeatherRisk> {
        let temp = conditions.temperature_c;
        if temp <= 35.0 {
            return None;
        }

        Some(
            WeatherRisk::new(
                "Heat Stress",
                RiskLevel::High,
                format!("Very high temperature ({}°C) causing plant stress", temp),
            )
            .with_action("Increase irrigation frequency. Provide shade if possible. Apply mulch.")
            .with_diseases(&["General stress increases disease susceptibility"]),
        )
    }
}
