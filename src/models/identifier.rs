use serde::{Deserialize, Serialize};

/// Separator between the crop and condition parts of a disease code.
pub const CROP_SEPARATOR: &str = "___";

/// Condition classes the severity and action-plan logic branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionKind {
    Healthy,
    LateBlight,
    Other,
}

impl ConditionKind {
    fn from_condition(condition: &str) -> Self {
        let normalized = condition.trim().replace('_', " ").to_lowercase();
        match normalized.as_str() {
            "healthy" => ConditionKind::Healthy,
            "late blight" => ConditionKind::LateBlight,
            _ => ConditionKind::Other,
        }
    }
}

/// A disease code such as `Tomato___Early_blight`, parsed once into its
/// crop and condition parts.
///
/// The original code is kept verbatim and never case-normalized; only the
/// condition classification looks at a normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseIdentifier {
    code: String,
    crop: Option<String>,
    condition: String,
    kind: ConditionKind,
}

impl DiseaseIdentifier {
    pub fn parse(code: &str) -> Self {
        let (crop, condition) = match code.split_once(CROP_SEPARATOR) {
            Some((crop, condition)) => (Some(crop.to_string()), condition.to_string()),
            None => (None, code.to_string()),
        };

        Self {
            code: code.to_string(),
            kind: ConditionKind::from_condition(&condition),
            crop,
            condition,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn crop(&self) -> Option<&str> {
        self.crop.as_deref()
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn kind(&self) -> ConditionKind {
        self.kind
    }

    pub fn is_healthy(&self) -> bool {
        self.kind == ConditionKind::Healthy
    }

    pub fn is_late_blight(&self) -> bool {
        self.kind == ConditionKind::LateBlight
    }

    pub fn display_name(&self) -> String {
        humanize(&self.code)
    }
}

impl std::fmt::Display for DiseaseIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Display form of a disease code: `___` becomes " - ", then every
/// remaining `_` becomes a space.
pub fn humanize(code: &str) -> String {
    code.replace(CROP_SEPARATOR, " - ").replace('_', " ")
}
