use super::KnowledgeBase;
use serde::Serialize;

/// Outcome of matching a raw classifier label against the known codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "code", rename_all = "lowercase")]
pub enum LabelResolution {
    /// The label is already a known code.
    Exact(String),
    /// The label differs only in separators or case from one known code.
    Normalized(String),
    /// No unique known code matches.
    Unrecognized,
}

impl LabelResolution {
    pub fn code(&self) -> Option<&str> {
        match self {
            LabelResolution::Exact(code) | LabelResolution::Normalized(code) => Some(code),
            LabelResolution::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, LabelResolution::Unrecognized)
    }
}

/// Lowercase ASCII alphanumerics only, so `Pepper__bell___Bacterial_spot`
/// and `Pepper_bell___Bacterial_spot` compare equal.
fn compact_key(label: &str) -> String {
    label
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl KnowledgeBase {
    pub fn resolve_label(&self, raw: &str) -> LabelResolution {
        let label = raw.trim();
        if self.contains(label) {
            return LabelResolution::Exact(label.to_string());
        }

        let key = compact_key(label);
        if key.is_empty() {
            return LabelResolution::Unrecognized;
        }

        let mut matches = self.codes().filter(|code| compact_key(code) == key);
        match (matches.next(), matches.next()) {
            (Some(code), None) => {
                tracing::debug!(label = raw, code, "Normalized classifier label");
                LabelResolution::Normalized(code.to_string())
            }
            (Some(_), Some(_)) => {
                tracing::warn!(label = raw, "Classifier label matches several known codes");
                LabelResolution::Unrecognized
            }
            (None, _) => LabelResolution::Unrecognized,
        }
    }

    /// Exact-match resolution without normalization. Surrounding
    /// whitespace is ignored, as in [`KnowledgeBase::resolve_label`].
    pub fn resolve_exact(&self, raw: &str) -> LabelResolution {
        let label = raw.trim();
        if self.contains(label) {
            LabelResolution::Exact(label.to_string())
        } else {
            LabelResolution::Unrecognized
        }
    }

    /// Resolve a label to the code the engine should be called with.
    /// Unrecognized labels pass through unchanged so the fallback path
    /// echoes what the classifier actually said.
    pub fn canonical_code(&self, raw: &str) -> String {
        match self.resolve_label(raw) {
            LabelResolution::Exact(code) | LabelResolution::Normalized(code) => code,
            LabelResolution::Unrecognized => {
                tracing::warn!(label = raw, "Unrecognized classifier label");
                raw.to_string()
            }
        }
    }
}
