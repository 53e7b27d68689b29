mod builtin;
pub mod resolver;

pub use resolver::LabelResolution;

use crate::error::{CropDocError, Result};
use crate::models::{DiseaseIdentifier, DiseaseRecord};
use std::collections::BTreeMap;
use std::path::Path;

/// Read-only table of agronomic facts keyed by exact disease code.
///
/// Built once at startup, either from the embedded table or from a YAML
/// file with the same record shape, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    records: BTreeMap<String, DiseaseRecord>,
}

impl KnowledgeBase {
    pub fn builtin() -> Self {
        Self {
            records: builtin::records().collect(),
        }
    }

    /// Parse a YAML mapping of disease code to record, then validate it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let records: BTreeMap<String, DiseaseRecord> = serde_yaml::from_str(yaml)?;
        let kb = Self { records };
        kb.validate()?;
        Ok(kb)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CropDocError::Config(format!(
                "Failed to read knowledge base {}: {}",
                path.display(),
                e
            ))
        })?;
        let kb = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            entries = kb.len(),
            "Loaded knowledge base"
        );
        Ok(kb)
    }

    /// Check the structural invariants every record must satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.records.is_empty() {
            return Err(CropDocError::InvalidData(
                "knowledge base has no entries".into(),
            ));
        }

        for (code, record) in &self.records {
            let id = DiseaseIdentifier::parse(code);

            if record.symptoms.is_empty() {
                return Err(invalid(code, "symptom list is empty"));
            }
            if record.prevention.is_empty() {
                return Err(invalid(code, "prevention list is empty"));
            }
            if record.treatment.organic.is_empty() {
                return Err(invalid(code, "organic treatment list is empty"));
            }
            if id.is_healthy() && record.has_chemical_treatment() {
                return Err(invalid(code, "healthy entry lists chemical treatments"));
            }
            if !id.is_healthy() && !record.has_chemical_treatment() {
                return Err(invalid(code, "disease entry has no chemical treatments"));
            }
        }

        Ok(())
    }

    pub fn lookup(&self, code: &str) -> Option<&DiseaseRecord> {
        self.records.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.records.contains_key(code)
    }

    /// Known disease codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DiseaseRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

fn invalid(code: &str, reason: &str) -> CropDocError {
    CropDocError::InvalidData(format!("{}: {}", code, reason))
}
