//! Crop leaf disease recommendation and severity engine.
//!
//! A classifier label plus its confidence goes in; a structured agronomic
//! action plan comes out. See [`RecommendationEngine::get_recommendation`].

pub mod config;
pub mod error;
pub mod knowledge;
pub mod logic;
pub mod models;
pub mod report;

pub use config::{ConfidencePolicy, Config};
pub use error::{CropDocError, Result};
pub use knowledge::{KnowledgeBase, LabelResolution};
pub use logic::{assess_disease_risk, classify, compose, RecommendationEngine};
pub use models::{
    Confidence, DiseaseIdentifier, DiseaseRecord, Recommendation, SeverityTier, WeatherConditions,
    WeatherRisk,
};
pub use report::DiagnosisReport;
