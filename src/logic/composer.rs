use crate::models::{ActionPlan, DiseaseIdentifier, DiseaseRecord, EconomicImpact, SeverityTier};

const HEALTHY_ACTIONS: [&str; 3] = [
    "✓ Plant is healthy - no action needed",
    "✓ Continue regular monitoring",
    "✓ Maintain good cultural practices",
];

const HIGH_ACTIONS: [&str; 3] = [
    "🚨 URGENT: Inspect entire field immediately",
    "🚨 Isolate affected area to prevent spread",
    "🚨 Begin treatment within 24 hours",
];

const MEDIUM_ACTIONS: [&str; 2] = [
    "⚠️ Monitor closely over next 3 days",
    "⚠️ Begin treatment as soon as possible",
];

const LOW_ACTION: &str = "✓ Early detection - good timing, preventive measures should be sufficient";

const UNCERTAIN_ACTIONS: [&str; 3] = [
    "❓ Confidence is low - consider getting expert confirmation",
    "Take clear photos of symptoms",
    "Monitor for symptom progression",
];

/// Build the severity-dependent part of a recommendation.
///
/// Healthy codes get the fixed no-action plan no matter what `severity` says.
pub fn compose(
    severity: SeverityTier,
    record: &DiseaseRecord,
    identifier: &DiseaseIdentifier,
) -> ActionPlan {
    if identifier.is_healthy() {
        return ActionPlan {
            immediate_actions: owned(&HEALTHY_ACTIONS),
            monitoring: monitoring_plan(SeverityTier::None).to_string(),
            economic_impact: economic_impact(SeverityTier::None),
        };
    }

    ActionPlan {
        immediate_actions: immediate_actions(severity, record),
        monitoring: monitoring_plan(severity).to_string(),
        economic_impact: economic_impact(severity),
    }
}

/// Directives for a diseased plant. Treatment entries are taken from the
/// record and never past the end of its lists.
pub fn immediate_actions(severity: SeverityTier, record: &DiseaseRecord) -> Vec<String> {
    match severity {
        SeverityTier::High => {
            let mut actions = owned(&HIGH_ACTIONS);
            actions.extend(record.first_chemical(2).iter().cloned());
            actions
        }
        SeverityTier::Medium => {
            let mut actions = owned(&MEDIUM_ACTIONS);
            actions.extend(record.first_organic(2).iter().cloned());
            actions
        }
        SeverityTier::Low => {
            let mut actions = vec![LOW_ACTION.to_string()];
            actions.extend(record.first_organic(1).iter().cloned());
            actions
        }
        SeverityTier::None => owned(&HEALTHY_ACTIONS),
        SeverityTier::Uncertain => owned(&UNCERTAIN_ACTIONS),
    }
}

pub fn monitoring_plan(severity: SeverityTier) -> &'static str {
    match severity {
        SeverityTier::High => {
            "Daily inspection required. Document spread with photos. Check weather forecasts."
        }
        SeverityTier::Medium => {
            "Check every 2-3 days. Monitor new growth areas and adjacent plants."
        }
        SeverityTier::Low => "Weekly inspection sufficient. Watch for symptom development.",
        SeverityTier::None => "Continue regular weekly monitoring for any changes.",
        SeverityTier::Uncertain => "Daily monitoring until diagnosis is confirmed by expert.",
    }
}

pub fn economic_impact(severity: SeverityTier) -> EconomicImpact {
    match severity {
        SeverityTier::High => EconomicImpact::new(
            "30-70%",
            "Severe - unmarketable produce",
            "Immediate intervention critical. Consider crop insurance.",
        ),
        SeverityTier::Medium => EconomicImpact::new(
            "10-30%",
            "Moderate - reduced market value",
            "Timely treatment will minimize losses.",
        ),
        SeverityTier::Low => EconomicImpact::new(
            "<10%",
            "Minimal if treated promptly",
            "Early intervention will prevent spread.",
        ),
        SeverityTier::None => EconomicImpact::new(
            "0%",
            "No impact - plant is healthy",
            "Continue preventive care for best yields.",
        ),
        SeverityTier::Uncertain => EconomicImpact::new(
            "Unknown until confirmed",
            "To be determined",
            "Get expert confirmation before treatment.",
        ),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Treatment;

    fn record(organic: &[&str], chemical: &[&str]) -> DiseaseRecord {
        DiseaseRecord {
            description: "Leaf spot".into(),
            symptoms: vec!["Brown spots".into()],
            treatment: Treatment {
                organic: organic.iter().map(|s| s.to_string()).collect(),
                chemical: chemical.iter().map(|s| s.to_string()).collect(),
            },
            prevention: vec!["Rotate crops".into()],
            fertilizer: "NPK 10-10-10".into(),
        }
    }

    fn diseased() -> DiseaseIdentifier {
        DiseaseIdentifier::parse("Tomato___Leaf_spot")
    }

    #[test]
    fn high_adds_first_two_chemicals() {
        let rec = record(&["neem"], &["chlorothalonil", "mancozeb", "azoxystrobin"]);
        let plan = compose(SeverityTier::High, &rec, &diseased());
        assert_eq!(plan.immediate_actions.len(), 5);
        assert_eq!(&plan.immediate_actions[..3], &owned(&HIGH_ACTIONS)[..]);
        assert_eq!(plan.immediate_actions[3], "chlorothalonil");
        assert_eq!(plan.immediate_actions[4], "mancozeb");
        assert_eq!(plan.economic_impact.yield_loss, "30-70%");
    }

    #[test]
    fn high_with_short_chemical_list() {
        let plan = compose(SeverityTier::High, &record(&["neem"], &["copper"]), &diseased());
        assert_eq!(plan.immediate_actions.len(), 4);

        let plan = compose(SeverityTier::High, &record(&["neem"], &[]), &diseased());
        assert_eq!(plan.immediate_actions.len(), 3);
    }

    #[test]
    fn medium_adds_first_two_organics() {
        let rec = record(&["remove leaves", "neem oil", "copper"], &["mancozeb"]);
        let plan = compose(SeverityTier::Medium, &rec, &diseased());
        assert_eq!(
            plan.immediate_actions,
            vec![
                MEDIUM_ACTIONS[0].to_string(),
                MEDIUM_ACTIONS[1].to_string(),
                "remove leaves".to_string(),
                "neem oil".to_string(),
            ]
        );
        assert_eq!(
            plan.monitoring,
            "Check every 2-3 days. Monitor new growth areas and adjacent plants."
        );
    }

    #[test]
    fn medium_with_single_organic_has_no_placeholder() {
        let plan = compose(SeverityTier::Medium, &record(&["neem oil"], &["x"]), &diseased());
        assert_eq!(plan.immediate_actions.len(), 3);
        assert!(plan.immediate_actions.iter().all(|a| !a.is_empty()));
        assert_eq!(plan.immediate_actions[2], "neem oil");
    }

    #[test]
    fn low_adds_first_organic() {
        let plan = compose(SeverityTier::Low, &record(&["neem oil", "copper"], &["x"]), &diseased());
        assert_eq!(
            plan.immediate_actions,
            vec![LOW_ACTION.to_string(), "neem oil".to_string()]
        );
        assert_eq!(plan.economic_impact.yield_loss, "<10%");
    }

    #[test]
    fn empty_organic_list_does_not_panic() {
        let rec = record(&[], &[]);
        assert_eq!(compose(SeverityTier::Medium, &rec, &diseased()).immediate_actions.len(), 2);
        assert_eq!(compose(SeverityTier::Low, &rec, &diseased()).immediate_actions.len(), 1);
    }

    #[test]
    fn uncertain_uses_triage_directives() {
        let rec = record(&["neem"], &["mancozeb"]);
        let plan = compose(SeverityTier::Uncertain, &rec, &diseased());
        assert_eq!(plan.immediate_actions, owned(&UNCERTAIN_ACTIONS));
        assert!(!plan.immediate_actions.contains(&"neem".to_string()));
        assert!(!plan.immediate_actions.contains(&"mancozeb".to_string()));
        assert_eq!(
            plan.monitoring,
            "Daily monitoring until diagnosis is confirmed by expert."
        );
    }

    #[test]
    fn healthy_ignores_severity() {
        let rec = record(&["No treatment needed"], &[]);
        let healthy = DiseaseIdentifier::parse("Tomato___healthy");
        for severity in SeverityTier::all() {
            let plan = compose(*severity, &rec, &healthy);
            assert_eq!(plan.immediate_actions, owned(&HEALTHY_ACTIONS));
            assert_eq!(
                plan.monitoring,
                "Continue regular weekly monitoring for any changes."
            );
            assert_eq!(plan.economic_impact.yield_loss, "0%");
        }
    }

    #[test]
    fn economic_impact_table() {
        let cases = [
            (SeverityTier::High, "30-70%", "Severe - unmarketable produce"),
            (SeverityTier::Medium, "10-30%", "Moderate - reduced market value"),
            (SeverityTier::Low, "<10%", "Minimal if treated promptly"),
            (SeverityTier::None, "0%", "No impact - plant is healthy"),
            (SeverityTier::Uncertain, "Unknown until confirmed", "To be determined"),
        ];
        for (severity, yield_loss, quality) in cases {
            let impact = economic_impact(severity);
            assert_eq!(impact.yield_loss, yield_loss);
            assert_eq!(impact.quality_impact, quality);
        }
        assert_eq!(
            economic_impact(SeverityTier::High).recommendation,
            "Immediate intervention critical. Consider crop insurance."
        );
        assert_eq!(
            economic_impact(SeverityTier::Uncertain).recommendation,
            "Get expert confirmation before treatment."
        );
    }

    #[test]
    fn monitoring_cadence() {
        assert!(monitoring_plan(SeverityTier::High).starts_with("Daily inspection"));
        assert!(monitoring_plan(SeverityTier::High).contains("photos"));
        assert!(monitoring_plan(SeverityTier::High).contains("weather"));
        assert!(monitoring_plan(SeverityTier::Medium).contains("2-3 days"));
        assert!(monitoring_plan(SeverityTier::Low).starts_with("Weekly"));
        assert!(monitoring_plan(SeverityTier::None).contains("weekly"));
        assert!(monitoring_plan(SeverityTier::Uncertain).contains("until diagnosis is confirmed"));
    }
}
