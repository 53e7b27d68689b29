use super::composer::compose;
use super::severity::classify;
use crate::knowledge::KnowledgeBase;
use crate::models::{
    Confidence, DiseaseIdentifier, EconomicImpact, Recommendation, SeverityTier, Treatment,
};

/// Single entry point turning a disease code and classifier confidence into
/// a full recommendation.
///
/// Holds only the read-only knowledge base, so one engine can be shared
/// across threads and every call depends only on its arguments.
pub struct RecommendationEngine {
    knowledge: KnowledgeBase,
}

impl RecommendationEngine {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Never fails. Confidence outside [0, 1] is clamped (NaN becomes 0)
    /// and the clamped value is what the result reports. Codes absent from
    /// the knowledge base get the generic fallback.
    pub fn get_recommendation(&self, code: &str, confidence: f64) -> Recommendation {
        let (clamped, changed) = Confidence::clamped_with_flag(confidence);
        if changed {
            tracing::warn!(
                code,
                raw = confidence,
                clamped = clamped.value(),
                "Confidence outside [0, 1], clamped"
            );
        }
        self.recommend(code, clamped)
    }

    pub fn recommend(&self, code: &str, confidence: Confidence) -> Recommendation {
        let identifier = DiseaseIdentifier::parse(code);

        let Some(record) = self.knowledge.lookup(code) else {
            tracing::warn!(code, "No knowledge base entry, using fallback");
            return fallback(&identifier, confidence);
        };

        let severity = classify(&identifier, confidence);
        let plan = compose(severity, record, &identifier);

        tracing::debug!(
            code,
            confidence = confidence.value(),
            severity = %severity,
            actions = plan.immediate_actions.len(),
            "Built recommendation"
        );

        Recommendation {
            disease: identifier.display_name(),
            disease_code: identifier.code().to_string(),
            confidence,
            severity,
            description: record.description.clone(),
            symptoms: record.symptoms.clone(),
            treatment: record.treatment.clone(),
            prevention: record.prevention.clone(),
            fertilizer: record.fertilizer.clone(),
            immediate_actions: plan.immediate_actions,
            monitoring: plan.monitoring,
            economic_impact: plan.economic_impact,
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(KnowledgeBase::builtin())
    }
}

/// Disease-agnostic recommendation for codes the knowledge base does not
/// know. Always `Uncertain`; the code is still echoed and humanized.
fn fallback(identifier: &DiseaseIdentifier, confidence: Confidence) -> Recommendation {
    Recommendation {
        disease: identifier.display_name(),
        disease_code: identifier.code().to_string(),
        confidence,
        severity: SeverityTier::Uncertain,
        description: "Detailed information not available in our database.".into(),
        symptoms: vec!["Consult local agricultural expert for identification".into()],
        treatment: Treatment {
            organic: vec![
                "Isolate affected plants".into(),
                "Document symptoms with photos".into(),
                "Contact agricultural extension office".into(),
            ],
            chemical: Vec::new(),
        },
        prevention: vec![
            "General good agricultural practices".into(),
            "Regular monitoring".into(),
            "Proper sanitation".into(),
        ],
        fertilizer: "Maintain balanced nutrition as per soil test".into(),
        immediate_actions: vec![
            "Take clear photos from multiple angles".into(),
            "Isolate affected plants if possible".into(),
            "Contact local agricultural extension service".into(),
            "Do not apply treatments until diagnosis confirmed".into(),
        ],
        monitoring: "Daily monitoring and documentation until expert consultation".into(),
        economic_impact: EconomicImpact::new(
            "Unknown",
            "Requires expert assessment",
            "Seek professional agricultural advice immediately",
        ),
    }
}
