//! The skin-health decision engine: a pure, synchronous pipeline from quiz
//! answers and capture flags to scores, a weighted index, a risk tier, and
//! prioritized recommendations, plus the radar projection used for display.

mod answers;
mod catalog;
mod confidence;
mod engine;
pub mod radar;
mod recommend;
mod risk;
mod scoring;

pub use answers::{
    AnswerSet, AnswerTag, CaptureAngle, CaptureSet, LESION_CHANGE_QUESTION, SKIN_TYPE_QUESTION,
    SYMPTOM_QUESTION,
};
pub use catalog::{catalog, Metric, MetricCatalog, MetricDefinition};
pub use confidence::estimate_confidence;
pub use engine::{AnalysisEngine, AnalysisResult};
pub use recommend::{recommend, Recommendation, RecommendationKind, TIP_THRESHOLD};
pub use risk::{classify_risk, RiskLevel};
pub use scoring::{
    baseline, health_index, score_answers, ScoreVector, SCORE_CEILING, SCORE_FLOOR,
};
