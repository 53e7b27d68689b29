use crate::knowledge::LabelResolution;
use crate::models::{Recommendation, WeatherRisk};
use serde::Serialize;
use std::fmt::{self, Write as _};

/// Everything the CLI reports for one classifier result.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisReport {
    pub label: String,
    pub resolution: LabelResolution,
    pub below_reporting_threshold: bool,
    /// The classifier score was outside [0, 1] and was clamped.
    pub confidence_clamped: bool,
    pub recommendation: Recommendation,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub weather_risks: Vec<WeatherRisk>,
}

impl DiagnosisReport {
    pub fn new(
        label: impl Into<String>,
        resolution: LabelResolution,
        recommendation: Recommendation,
    ) -> Self {
        Self {
            label: label.into(),
            resolution,
            below_reporting_threshold: false,
            confidence_clamped: false,
            recommendation,
            weather_risks: Vec::new(),
        }
    }

    pub fn with_threshold_flag(mut self, below: bool) -> Self {
        self.below_reporting_threshold = below;
        self
    }

    pub fn with_clamped_flag(mut self, clamped: bool) -> Self {
        self.confidence_clamped = clamped;
        self
    }

    pub fn with_weather_risks(mut self, risks: Vec<WeatherRisk>) -> Self {
        self.weather_risks = risks;
        self
    }
}

fn section(out: &mut String, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    for item in items {
        writeln!(out, "  - {}", item)?;
    }
    Ok(())
}

impl fmt::Display for DiagnosisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rec = &self.recommendation;
        let mut out = String::new();

        writeln!(out, "{} ({})", rec.disease, rec.disease_code)?;
        writeln!(
            out,
            "Confidence: {}   Severity: {} {}",
            rec.confidence,
            rec.severity.symbol(),
            rec.severity
        )?;
        if let LabelResolution::Normalized(code) = &self.resolution {
            writeln!(out, "Classifier label '{}' matched as {}", self.label, code)?;
        }
        if self.confidence_clamped {
            writeln!(out, "Note: classifier confidence was outside 0-1 and has been clamped")?;
        }
        if self.below_reporting_threshold {
            writeln!(out, "Note: confidence is below the reporting threshold")?;
        }

        writeln!(out)?;
        writeln!(out, "{}", rec.description)?;

        section(&mut out, "Immediate actions", &rec.immediate_actions)?;
        section(&mut out, "Symptoms", &rec.symptoms)?;
        // Treatment lists only once a treatable diagnosis is established
        if rec.severity.is_actionable() {
            section(&mut out, "Organic treatment", &rec.treatment.organic)?;
            section(&mut out, "Chemical treatment", &rec.treatment.chemical)?;
        }
        section(&mut out, "Prevention", &rec.prevention)?;

        writeln!(out)?;
        writeln!(out, "Fertilizer: {}", rec.fertilizer)?;
        writeln!(out, "Monitoring: {}", rec.monitoring)?;
        writeln!(
            out,
            "Economic impact: yield loss {}, {}. {}",
            rec.economic_impact.yield_loss,
            rec.economic_impact.quality_impact,
            rec.economic_impact.recommendation
        )?;

        if !self.weather_risks.is_empty() {
            writeln!(out)?;
            writeln!(out, "Weather risk")?;
            for risk in &self.weather_risks {
                writeln!(out, "  [{}] {}: {}", risk.risk_level, risk.risk_type, risk.reason)?;
                writeln!(out, "      {}", risk.preventive_action)?;
            }
        }

        f.write_str(out.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{assess_disease_risk, RecommendationEngine};
    use crate::models::WeatherConditions;

    #[test]
    fn text_report_sections() {
        let engine = RecommendationEngine::default();
        let rec = engine.get_recommendation("Tomato___Early_blight", 0.92);
        let report = DiagnosisReport::new(
            "Tomato_Early_blight",
            LabelResolution::Normalized("Tomato___Early_blight".into()),
            rec,
        );
        let text = report.to_string();

        assert!(text.starts_with("Tomato - Early blight (Tomato___Early_blight)"));
        assert!(text.contains("Severity: ! high"));
        assert!(text.contains("matched as Tomato___Early_blight"));
        assert!(text.contains("Immediate actions"));
        assert!(text.contains("Chemical treatment"));
        assert!(text.contains("yield loss 30-70%"));
        assert!(!text.contains("Weather risk"));
    }

    #[test]
    fn healthy_report_omits_empty_chemical_section() {
        let engine = RecommendationEngine::default();
        let rec = engine.get_recommendation("Potato___healthy", 0.9);
        let resolution = LabelResolution::Exact("Potato___healthy".into());
        let text = DiagnosisReport::new("Potato___healthy", resolution, rec).to_string();
        assert!(!text.contains("Chemical treatment"));
    }

    #[test]
    fn uncertain_report_omits_treatment_lists() {
        let engine = RecommendationEngine::default();
        let rec = engine.get_recommendation("Tomato___Bacterial_spot", 0.4);
        let resolution = LabelResolution::Exact("Tomato___Bacterial_spot".into());
        let text = DiagnosisReport::new("Tomato___Bacterial_spot", resolution, rec).to_string();
        assert!(!text.contains("Organic treatment"));
        assert!(!text.contains("Chemical treatment"));
        assert!(text.contains("Immediate actions"));
    }

    #[test]
    fn clamped_confidence_is_noted() {
        let engine = RecommendationEngine::default();
        let rec = engine.get_recommendation("Tomato___Early_blight", 1.7);
        let resolution = LabelResolution::Exact("Tomato___Early_blight".into());
        let report = DiagnosisReport::new("Tomato___Early_blight", resolution, rec)
            .with_clamped_flag(true);

        assert!(report.to_string().contains("has been clamped"));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["confidence_clamped"], true);
        assert_eq!(value["recommendation"]["confidence"], 1.0);
    }

    #[test]
    fn json_report_includes_weather_and_flag() {
        let engine = RecommendationEngine::default();
        let rec = engine.get_recommendation("Potato___Late_blight", 0.2);
        let resolution = LabelResolution::Exact("Potato___Late_blight".into());
        let report = DiagnosisReport::new("Potato___Late_blight", resolution, rec)
            .with_threshold_flag(true)
            .with_weather_risks(assess_disease_risk(&WeatherConditions::new(20.0, 90.0)));

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["below_reporting_threshold"], true);
        assert_eq!(value["resolution"]["kind"], "exact");
        assert_eq!(value["recommendation"]["severity"], "uncertain");
        assert_eq!(value["weather_risks"][0]["risk_level"], "HIGH");
        assert!(report.to_string().contains("below the reporting threshold"));
    }

    #[test]
    fn json_report_omits_empty_weather() {
        let engine = RecommendationEngine::default();
        let rec = engine.get_recommendation("Unknown", 0.5);
        let report = DiagnosisReport::new("Unknown", LabelResolution::Unrecognized, rec);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("weather_risks").is_none());
        assert_eq!(value["resolution"]["kind"], "unrecognized");
    }
}
