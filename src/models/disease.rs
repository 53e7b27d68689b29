use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treatment {
    pub organic: Vec<String>,
    #[serde(default)]
    pub chemical: Vec<String>,
}

/// Agronomic facts for one known disease code. List order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub description: String,
    pub symptoms: Vec<String>,
    pub treatment: Treatment,
    pub prevention: Vec<String>,
    pub fertilizer: String,
}

impl DiseaseRecord {
    pub fn first_organic(&self, n: usize) -> &[String] {
        &self.treatment.organic[..n.min(self.treatment.organic.len())]
    }

    pub fn first_chemical(&self, n: usize) -> &[String] {
        &self.treatment.chemical[..n.min(self.treatment.chemical.len())]
    }

    pub fn has_chemical_treatment(&self) -> bool {
        !self.treatment.chemical.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(organic: &[&str], chemical: &[&str]) -> DiseaseRecord {
        DiseaseRecord {
            description: "test".into(),
            symptoms: vec!["spots".into()],
            treatment: Treatment {
                organic: organic.iter().map(|s| s.to_string()).collect(),
                chemical: chemical.iter().map(|s| s.to_string()).collect(),
            },
            prevention: vec!["rotate".into()],
            fertilizer: "NPK".into(),
        }
    }

    #[test]
    fn first_n_never_overruns() {
        let rec = record(&["neem"], &[]);
        assert_eq!(rec.first_organic(2), &["neem".to_string()]);
        assert!(rec.first_chemical(2).is_empty());
        assert!(!rec.has_chemical_treatment());
    }

    #[test]
    fn first_n_truncates() {
        let rec = record(&["a", "b", "c"], &["x", "y", "z"]);
        assert_eq!(rec.first_organic(2).len(), 2);
        assert_eq!(rec.first_chemical(2), &["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn chemical_defaults_to_empty() {
        let yaml = "organic:\n  - Continue care\n";
        let treatment: Treatment = serde_yaml::from_str(yaml).unwrap();
        assert!(treatment.chemical.is_empty());
    }
}
