use crate::models::{Confidence, ConditionKind, DiseaseIdentifier, SeverityTier};

/// Late blight moves fast enough that moderate confidence already warrants
/// action: above these thresholds it is `High` / `Medium`, and it is never
/// reported as `Low`.
const LATE_BLIGHT_HIGH: f64 = 0.7;
const LATE_BLIGHT_MEDIUM: f64 = 0.5;

/// Lower bounds (inclusive) of the general tiers.
const GENERAL_LOW: f64 = 0.6;
const GENERAL_MEDIUM: f64 = 0.75;
const GENERAL_HIGH: f64 = 0.9;

/// Map a parsed disease code and classifier confidence to a severity tier.
///
/// Priority order, first match wins:
/// - healthy condition: `None` at any confidence
/// - late blight: `> 0.7` High, `> 0.5` Medium, otherwise Uncertain
/// - anything else: `< 0.6` Uncertain, `< 0.75` Low, `< 0.9` Medium, else High
pub fn classify(identifier: &DiseaseIdentifier, confidence: Confidence) -> SeverityTier {
    let c = confidence.value();

    match identifier.kind() {
        ConditionKind::Healthy => SeverityTier::None,
        ConditionKind::LateBlight => {
            if c > LATE_BLIGHT_HIGH {
                SeverityTier::High
            } else if c > LATE_BLIGHT_MEDIUM {
                SeverityTier::Medium
            } else {
                SeverityTier::Uncertain
            }
        }
        ConditionKind::Other => {
            if c < GENERAL_LOW {
                SeverityTier::Uncertain
            } else if c < GENERAL_MEDIUM {
                SeverityTier::Low
            } else if c < GENERAL_HIGH {
                SeverityTier::Medium
            } else {
                SeverityTier::High
            }
        }
    }
}

/// Convenience wrapper for callers holding a raw code and score.
/// Out-of-range confidence is clamped.
pub fn classify_code(code: &str, confidence: f64) -> SeverityTier {
    classify(
        &DiseaseIdentifier::parse(code),
        Confidence::clamped(confidence),
    )
}
