use crate::error::{CropDocError, Result};
use crate::knowledge::KnowledgeBase;
use crate::models::Confidence;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidencePolicy {
    /// Out-of-range confidence is clamped into [0, 1].
    #[default]
    Clamp,
    /// Out-of-range confidence is an error.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub confidence_policy: ConfidencePolicy,
    /// Classifier results below this confidence are flagged in reports.
    pub reporting_threshold: f64,
    /// Map upstream label variants onto known codes before lookup.
    pub normalize_labels: bool,
    /// YAML file replacing the built-in knowledge base.
    pub knowledge_base_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confidence_policy: ConfidencePolicy::Clamp,
            reporting_threshold: 0.3,
            normalize_labels: true,
            knowledge_base_path: None,
        }
    }
}

impl Config {
    /// Load configuration. An explicit path must exist; otherwise the
    /// standard locations are searched and defaults are used when none has
    /// a file.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(CropDocError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.to_path_buf()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| CropDocError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::from_yaml_str(&config_str)?;
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content)?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| CropDocError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.reporting_threshold) {
            return Err(CropDocError::Config(format!(
                "reporting_threshold must be between 0 and 1, got {}",
                self.reporting_threshold
            )));
        }
        Ok(())
    }

    /// Search for a config file in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/cropdoc.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Then the XDG config directory
        Self::default_config_path().filter(|p| p.exists())
    }

    /// ~/.config/cropdoc/config.yaml
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cropdoc").join("config.yaml"))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| CropDocError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }

    /// Knowledge base named by the config, or the built-in table.
    pub fn knowledge_base(&self) -> Result<KnowledgeBase> {
        match &self.knowledge_base_path {
            Some(path) => KnowledgeBase::from_path(path),
            None => Ok(KnowledgeBase::builtin()),
        }
    }

    /// Apply the configured policy to a raw classifier score. The flag is
    /// true when clamping changed the value.
    pub fn confidence(&self, raw: f64) -> Result<(Confidence, bool)> {
        match self.confidence_policy {
            ConfidencePolicy::Reject => Ok((Confidence::new(raw)?, false)),
            ConfidencePolicy::Clamp => {
                let (confidence, changed) = Confidence::clamped_with_flag(raw);
                if changed {
                    tracing::warn!(
                        raw,
                        clamped = confidence.value(),
                        "Confidence outside [0, 1], clamped"
                    );
                }
                Ok((confidence, changed))
            }
        }
    }

    pub fn below_reporting_threshold(&self, confidence: Confidence) -> bool {
        confidence.value() < self.reporting_threshold
    }
}
