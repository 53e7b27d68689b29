use super::Rule;
use crate::models::{RiskLevel, WeatherConditions, WeatherRisk};

/// Bacterial spot risk: warm (>28°C) and humid (>65%)
pub struct BacterialRule;

impl Rule for BacterialRule {
    fn id(&self) -> &'static str {
        "bacterial"
    }

    fn name(&self) -> &'static str {
        "Bacterial Disease Risk"
    }

    fn evaluate(&self, conditions: &WeatherConditions) -> Option<WeatherRisk> {
        let temp = conditions.temperature_c;
        let humidity = conditions.humidity_percent;

        if temp <= 28.0 || humidity <= 65.0 {
            return None;
        }

        Some(
            WeatherRisk::new(
                "Bacterial Diseases",
                RiskLevel::Medium,
                format!(
                    "Warm ({}°C) and humid ({}%) conditions favor bacterial growth",
                    temp, humidity
                ),
            )
            .with_action("Avoid overhead watering. Use drip irrigation. Sanitize tools regularly.")
            .with_diseases(&["Bacterial Spot"]),
        )
    }
}
