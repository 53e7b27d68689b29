use super::Rule;
use crate::models::{RiskLevel, WeatherConditions, WeatherRisk};

/// Ideal growing band: 18-28°C and 40-70% humidity, both inclusive.
pub struct OptimalConditionsRule;

impl Rule for OptimalConditionsRule {
    fn id(&self) -> &'static str {
        "optimal_conditions"
    }

    fn name(&self) -> &'static str {
        "Optimal Growing Conditions"
    }

    fn evaluate(&self, conditions: &WeatherConditions) -> Option<WeatherRisk> {
        let temp = conditions.temperature_c;
        let humidity = conditions.humidity_percent;

        if !(18.0..=28.0).contains(&temp) || !(40.0..=70.0).contains(&humidity) {
            return None;
        }

        Some(
            WeatherRisk::new(
                "Optimal Growing Conditions",
                RiskLevel::Low,
                format!(
                    "Temperature ({}°C) and humidity ({}%) are in ideal range",
                    temp, humidity
                ),
            )
            .with_action("Continue regular monitoring. Maintain good cultural practices."),
        )
    }
}
