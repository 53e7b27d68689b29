use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropDocError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid confidence {0}: expected a value between 0 and 1")]
    InvalidConfidence(f64),
}

pub type Result<T> = std::result::Result<T, CropDocError>;
