use super::{
    bacterial::BacterialRule, cold_stress::ColdStressRule, fungal::FungalRule,
    heat_stress::HeatStressRule, optimal::OptimalConditionsRule, Rule,
};
use crate::models::{WeatherConditions, WeatherRisk};

pub struct WeatherRiskEngine {
    rules: Vec<Box<dyn Rule>>,
    /// Only consulted when no other rule fires.
    fallback: Box<dyn Rule>,
}

impl WeatherRiskEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(FungalRule),
            Box::new(BacterialRule),
            Box::new(HeatStressRule),
            Box::new(ColdStressRule),
        ];

        Self {
            rules,
            fallback: Box::new(OptimalConditionsRule),
        }
    }

    pub fn evaluate(&self, conditions: &WeatherConditions) -> Vec<WeatherRisk> {
        let mut risks: Vec<WeatherRisk> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(conditions))
            .collect();

        if risks.is_empty() {
            risks.extend(self.fallback.evaluate(conditions));
        }

        tracing::debug!(
            temperature_c = conditions.temperature_c,
            humidity_percent = conditions.humidity_percent,
            risks = risks.len(),
            "Assessed weather disease risk"
        );

        risks
    }

    pub fn evaluate_rule(
        &self,
        rule_id: &str,
        conditions: &WeatherConditions,
    ) -> Option<WeatherRisk> {
        self.rules
            .iter()
            .chain(std::iter::once(&self.fallback))
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(conditions))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules
            .iter()
            .chain(std::iter::once(&self.fallback))
            .map(|r| (r.id(), r.name()))
            .collect()
    }
}

impl Default for WeatherRiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Assess disease risk for the given field conditions with the default rule set.
pub fn assess_disease_risk(conditions: &WeatherConditions) -> Vec<WeatherRisk> {
    WeatherRiskEngine::new().evaluate(conditions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;

    fn risk_types(risks: &[WeatherRisk]) -> Vec<&str> {
        risks.iter().map(|r| r.risk_type.as_str()).collect()
    }

    #[test]
    fn humid_and_mild_is_high_fungal_risk() {
        let risks = assess_disease_risk(&WeatherConditions::new(22.0, 85.0));
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].risk_type, "Fungal Diseases (Early & Late Blight)");
        assert_eq!(risks[0].risk_level, RiskLevel::High);
        assert!(risks[0].reason.contains("85%"));
        assert!(risks[0].reason.contains("22°C"));
    }

    #[test]
    fn warm_and_humid_stacks_fungal_and_bacterial() {
        let risks = assess_disease_risk(&WeatherConditions::new(29.0, 75.0));
        assert_eq!(risk_types(&risks), vec!["Fungal Diseases", "Bacterial Diseases"]);
        assert_eq!(risks[0].risk_level, RiskLevel::Medium);
    }

    #[test]
    fn heat_stress() {
        let risks = assess_disease_risk(&WeatherConditions::new(38.0, 30.0));
        assert_eq!(risk_types(&risks), vec!["Heat Stress"]);
        assert_eq!(risks[0].risk_level, RiskLevel::High);
    }

    #[test]
    fn hot_and_humid_adds_bacterial_to_heat_stress() {
        let risks = assess_disease_risk(&WeatherConditions::new(36.0, 70.0));
        assert_eq!(risk_types(&risks), vec!["Bacterial Diseases", "Heat Stress"]);
    }

    #[test]
    fn cold_stress() {
        let risks = assess_disease_risk(&WeatherConditions::new(5.0, 60.0));
        assert_eq!(risk_types(&risks), vec!["Cold Stress"]);
        assert_eq!(risks[0].risk_level, RiskLevel::Medium);
    }

    #[test]
    fn ideal_conditions_are_low_risk() {
        let risks = assess_disease_risk(&WeatherConditions::new(24.0, 55.0));
        assert_eq!(risk_types(&risks), vec!["Optimal Growing Conditions"]);
        assert_eq!(risks[0].risk_level, RiskLevel::Low);
        assert!(risks[0].diseases.is_empty());
    }

    #[test]
    fn unremarkable_conditions_report_nothing() {
        // Cool but not cold, dry: no rule applies and not in the ideal band
        assert!(assess_disease_risk(&WeatherConditions::new(14.0, 30.0)).is_empty());
    }

    #[test]
    fn fungal_boundaries_are_exclusive() {
        assert!(assess_disease_risk(&WeatherConditions::new(15.0, 85.0))
            .iter()
            .all(|r| !r.risk_type.starts_with("Fungal")));
        assert!(assess_disease_risk(&WeatherConditions::new(22.0, 80.0))
            .iter()
            .all(|r| r.risk_level != RiskLevel::High));
    }

    #[test]
    fn list_and_evaluate_single_rule() {
        let engine = WeatherRiskEngine::new();
        let ids: Vec<&str> = engine.list_rules().into_iter().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec!["fungal", "bacterial", "heat_stress", "cold_stress", "optimal_conditions"]
        );

        let conditions = WeatherConditions::new(5.0, 60.0);
        assert!(engine.evaluate_rule("cold_stress", &conditions).is_some());
        assert!(engine.evaluate_rule("heat_stress", &conditions).is_none());
        assert!(engine.evaluate_rule("nonexistent", &conditions).is_none());
    }
}
