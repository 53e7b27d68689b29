use super::Rule;
use crate::models::{RiskLevel, WeatherConditions, WeatherRisk};

/// Fungal disease (early and late blight) risk
///
/// Blight spores germinate on wet foliage at moderate temperatures.
///
/// Severity levels:
/// - High: humidity >80% with 15-30°C (exclusive)
/// - Medium: humidity >70% with 20-30°C (exclusive)
pub struct FungalRule;

impl Rule for FungalRule {
    fn id(&self) -> &'static str {
        "fungal"
    }

    fn name(&self) -> &'static str {
        "Fungal Disease Risk"
    }

    fn evaluate(&self, conditions: &WeatherConditions) -> Option<WeatherRisk> {
        let temp = conditions.temperature_c;
        let humidity = conditions.humidity_percent;

        if humidity > 80.0 && temp > 15.0 && temp < 30.0 {
            return Some(
                WeatherRisk::new(
                    "Fungal Diseases (Early & Late Blight)",
                    RiskLevel::High,
                    format!(
                        "High humidity ({}%) and moderate temperature ({}°C) create ideal \
                         conditions for fungal growth",
                        humidity, temp
                    ),
                )
                .with_action(
                    "Apply preventive fungicide immediately. Improve air circulation. \
                     Avoid overhead watering.",
                )
                .with_diseases(&["Tomato Late Blight", "Potato Late Blight", "Early Blight"]),
            );
        }

        if humidity > 70.0 && temp > 20.0 && temp < 30.0 {
            return Some(
                WeatherRisk::new(
                    "Fungal Diseases",
                    RiskLevel::Medium,
                    format!("Elevated humidity ({}%) favorable for fungal spores", humidity),
                )
                .with_action("Monitor plants closely. Consider preventive fungicide application.")
                .with_diseases(&["Early Blight", "Late Blight"]),
            );
        }

        None
    }
}
