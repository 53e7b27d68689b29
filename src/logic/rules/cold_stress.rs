use super::Rule;
use crate::models::{RiskLevel, WeatherConditions, WeatherRisk};

/// Cold stress - below 10°C growth slows and the disease window widens.
pub struct ColdStressRule;

impl Rule for ColdStressRule {
    fn id(&self) -> &'static str {
        "cold_stress"
    }

    fn name(&self) -> &'static str {
        "Cold Stress"
    }

    fn evaluate(&self, conditions: &WeatherConditions) -> Option<WeatherRisk> {
        let temp = conditions.temperature_c;
        if temp >= 10.0 {
            return None;
        }

        Some(
            WeatherRisk::new(
                "Cold Stress",
                RiskLevel::Medium,
                format!("Low temperature ({}°C) slowing plant growth", temp),
            )
            .with_action("Protect plants from frost. Reduce watering frequency.")
            .with_diseases(&["Slowed growth increases disease window"]),
        )
    }
}
