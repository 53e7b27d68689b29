use crate::error::{CropDocError, Result};
use serde::{Deserialize, Serialize};

/// Urgency tier of a diagnosis.
///
/// `Uncertain` is its own outcome, not a point between `None` and `Low`:
/// it can come out of any confidence when the classification is ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    None,
    Uncertain,
    Low,
    Medium,
    High,
}

impl SeverityTier {
    pub fn all() -> &'static [SeverityTier] {
        &[
            SeverityTier::None,
            SeverityTier::Uncertain,
            SeverityTier::Low,
            SeverityTier::Medium,
            SeverityTier::High,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::None => "none",
            SeverityTier::Uncertain => "uncertain",
            SeverityTier::Low => "low",
            SeverityTier::Medium => "medium",
            SeverityTier::High => "high",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SeverityTier::None => "✓",
            SeverityTier::Uncertain => "?",
            SeverityTier::Low => "→",
            SeverityTier::Medium => "⚠",
            SeverityTier::High => "!",
        }
    }

    /// True for tiers that call for treatment.
    pub fn is_actionable(&self) -> bool {
        matches!(
            self,
            SeverityTier::Low | SeverityTier::Medium | SeverityTier::High
        )
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifier confidence, always within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Strict constructor: NaN and values outside [0, 1] are rejected.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(CropDocError::InvalidConfidence(value));
        }
        Ok(Self(value))
    }

    /// Lenient constructor: NaN maps to 0.0, everything else is clamped.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Like [`Confidence::clamped`], also reporting whether the value changed.
    pub fn clamped_with_flag(value: f64) -> (Self, bool) {
        let confidence = Self::clamped(value);
        (confidence, confidence.0 != value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }
}

impl TryFrom<f64> for Confidence {
    type Error = CropDocError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.as_percent())
    }
}
