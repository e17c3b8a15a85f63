use serde::Serialize;

use super::answers::{AnswerSet, CaptureSet};
use super::catalog::{catalog, MetricCatalog};
use super::confidence::estimate_confidence;
use super::recommend::{recommend, Recommendation};
use super::risk::{classify_risk, RiskLevel};
use super::scoring::{health_index, score_answers, ScoreVector};

/// Complete outcome of one analysis run. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub scores: ScoreVector,
    pub index: u8,
    pub risk: RiskLevel,
    pub confidence: u8,
    pub recommendations: Vec<Recommendation>,
}

/// Stateless evaluator turning an answer/capture snapshot into a result.
/// Runs are independent pure computations; concurrent callers need no
/// coordination.
pub struct AnalysisEngine {
    catalog: &'static MetricCatalog,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self { catalog: catalog() }
    }

    pub fn catalog(&self) -> &'static MetricCatalog {
        self.catalog
    }

    pub fn analyze(&self, answers: &AnswerSet, captures: &CaptureSet) -> AnalysisResult {
        let scores = score_answers(answers);
        let index = health_index(&scores, self.catalog);
        let risk = classify_risk(answers);
        let confidence = estimate_confidence(captures);
        let recommendations = recommend(&scores, risk);

        AnalysisResult {
            scores,
            index,
            risk,
            confidence,
            recommendations,
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
