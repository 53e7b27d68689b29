use serde::{Deserialize, Serialize};

/// Caller-supplied field conditions. Temperature is in °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    pub temperature_c: f64,
    pub humidity_percent: f64,
}

impl WeatherConditions {
    pub fn new(temperature_c: f64, humidity_percent: f64) -> Self {
        Self {
            temperature_c,
            humidity_percent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRisk {
    #[serde(rename = "type")]
    pub risk_type: String,
    pub risk_level: RiskLevel,
    pub reason: String,
    pub preventive_action: String,
    pub diseases: Vec<String>,
}

impl WeatherRisk {
    pub fn new(
        risk_type: impl Into<String>,
        risk_level: RiskLevel,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            risk_type: risk_type.into(),
            risk_level,
            reason: reason.into(),
            preventive_action: String::new(),
            diseases: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.preventive_action = action.into();
        self
    }

    pub fn with_diseases(mut self, diseases: &[&str]) -> Self {
        self.diseases = diseases.iter().map(|d| d.to_string()).collect();
        self
    }
}
