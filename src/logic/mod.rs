pub mod composer;
pub mod engine;
pub mod rules;
pub mod severity;

pub use composer::compose;
pub use engine::RecommendationEngine;
pub use rules::engine::assess_disease_risk;
pub use rules::WeatherRiskEngine;
pub use severity::{classify, classify_code};
