use super::{Confidence, SeverityTier, Treatment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicImpact {
    pub yield_loss: String,
    pub quality_impact: String,
    pub recommendation: String,
}

impl EconomicImpact {
    pub fn new(
        yield_loss: impl Into<String>,
        quality_impact: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            yield_loss: yield_loss.into(),
            quality_impact: quality_impact.into(),
            recommendation: recommendation.into(),
        }
    }
}

/// The severity-dependent part of a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub immediate_actions: Vec<String>,
    pub monitoring: String,
    pub economic_impact: EconomicImpact,
}

/// Composite output for one diagnosis. Field names are part of the JSON
/// contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub disease: String,
    pub disease_code: String,
    pub confidence: Confidence,
    pub severity: SeverityTier,
    pub description: String,
    pub symptoms: Vec<String>,
    pub treatment: Treatment,
    pub prevention: Vec<String>,
    pub fertilizer: String,
    pub immediate_actions: Vec<String>,
    pub monitoring: String,
    pub economic_impact: EconomicImpact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_field_names() {
        let rec = Recommendation {
            disease: "Tomato - Early blight".into(),
            disease_code: "Tomato___Early_blight".into(),
            confidence: Confidence::clamped(0.92),
            severity: SeverityTier::High,
            description: "d".into(),
            symptoms: vec!["s".into()],
            treatment: Treatment {
                organic: vec!["o".into()],
                chemical: vec!["c".into()],
            },
            prevention: vec!["p".into()],
            fertilizer: "f".into(),
            immediate_actions: vec!["a".into()],
            monitoring: "m".into(),
            economic_impact: EconomicImpact::new("30-70%", "q", "r"),
        };

        let value = serde_json::to_value(&rec).unwrap();
        for key in [
            "disease",
            "disease_code",
            "confidence",
            "severity",
            "description",
            "symptoms",
            "treatment",
            "prevention",
            "fertilizer",
            "immediate_actions",
            "monitoring",
            "economic_impact",
        ] {
            assert!(value.get(key).is_some(), "missing field {}", key);
        }
        assert_eq!(value["severity"], "high");
        assert_eq!(value["confidence"], 0.92);
        assert_eq!(value["treatment"]["chemical"][0], "c");
        assert_eq!(value["economic_impact"]["yield_loss"], "30-70%");
        assert!(value["economic_impact"].get("quality_impact").is_some());
        assert!(value["economic_impact"].get("recommendation").is_some());
    }
}
