use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::answers::{
    AnswerSet, AnswerTag, LESION_CHANGE_QUESTION, SKIN_TYPE_QUESTION, SYMPTOM_QUESTION,
};
use super::catalog::{Metric, MetricCatalog};

pub const SCORE_FLOOR: u8 = 10;
pub const SCORE_CEILING: u8 = 95;

/// Per-metric scores for one analysis run, clamped to
/// `[SCORE_FLOOR, SCORE_CEILING]`. Created once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreVector(BTreeMap<Metric, u8>);

impl ScoreVector {
    pub fn from_entries<I: IntoIterator<Item = (Metric, u8)>>(entries: I) -> Self {
        Self(entries.into_iter().collect())
    }

    pub fn get(&self, metric: Metric) -> Option<u8> {
        self.0.get(&metric).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, u8)> + '_ {
        self.0.iter().map(|(metric, score)| (*metric, *score))
    }

    /// Entries ascending by score; ties keep catalog order (stable sort).
    pub fn ranked(&self) -> Vec<(Metric, u8)> {
        let mut entries: Vec<(Metric, u8)> = self.iter().collect();
        entries.sort_by_key(|(_, score)| *score);
        entries
    }
}

/// Domain-calibrated starting score before any answer adjustments.
pub const fn baseline(metric: Metric) -> u8 {
    match metric {
        Metric::Hydration => 70,
        Metric::Barrier => 74,
        Metric::Texture => 72,
        Metric::Pigment => 68,
        Metric::Redness => 76,
        Metric::Sebum => 73,
        Metric::Pores => 66,
    }
}

struct AnswerAdjustment {
    question: u8,
    tag: AnswerTag,
    deltas: &'static [(Metric, i16)],
}

/// Declarative (question, tag) -> per-metric delta table. Tags absent from
/// the table (and unknown tags generally) contribute nothing.
const ADJUSTMENTS: &[AnswerAdjustment] = &[
    AnswerAdjustment {
        question: SKIN_TYPE_QUESTION,
        tag: AnswerTag::Dry,
        deltas: &[
            (Metric::Hydration, -16),
            (Metric::Barrier, -10),
            (Metric::Texture, -8),
        ],
    },
    AnswerAdjustment {
        question: SKIN_TYPE_QUESTION,
        tag: AnswerTag::Combination,
        deltas: &[(Metric::Hydration, -6), (Metric::Sebum, -8)],
    },
    AnswerAdjustment {
        question: SKIN_TYPE_QUESTION,
        tag: AnswerTag::Oily,
        deltas: &[(Metric::Sebum, -18), (Metric::Pores, -12)],
    },
    AnswerAdjustment {
        question: SYMPTOM_QUESTION,
        tag: AnswerTag::Sensitive,
        deltas: &[(Metric::Redness, -14), (Metric::Barrier, -10)],
    },
    AnswerAdjustment {
        question: SYMPTOM_QUESTION,
        tag: AnswerTag::Inflammation,
        deltas: &[(Metric::Redness, -22), (Metric::Barrier, -16)],
    },
    AnswerAdjustment {
        question: LESION_CHANGE_QUESTION,
        tag: AnswerTag::HighRisk,
        deltas: &[(Metric::Pigment, -12), (Metric::Texture, -4)],
    },
    AnswerAdjustment {
        question: LESION_CHANGE_QUESTION,
        tag: AnswerTag::MediumRisk,
        deltas: &[(Metric::Pigment, -6)],
    },
];

/// Fold the answer deltas over the baselines, then clamp every metric.
pub fn score_answers(answers: &AnswerSet) -> ScoreVector {
    let mut raw: BTreeMap<Metric, i16> = Metric::ordered()
        .into_iter()
        .map(|metric| (metric, baseline(metric) as i16))
        .collect();

    for (question, tag) in answers.iter() {
        for adjustment in ADJUSTMENTS {
            if adjustment.question == question && adjustment.tag == tag {
                for (metric, delta) in adjustment.deltas {
                    if let Some(score) = raw.get_mut(metric) {
                        *score += delta;
                    }
                }
            }
        }
    }

    ScoreVector(
        raw.into_iter()
            .map(|(metric, score)| {
                (
                    metric,
                    score.clamp(SCORE_FLOOR as i16, SCORE_CEILING as i16) as u8,
                )
            })
            .collect(),
    )
}

/// Weighted aggregate of the score vector, rounded half away from zero.
pub fn health_index(scores: &ScoreVector, catalog: &MetricCatalog) -> u8 {
    let weighted: f64 = scores
        .iter()
        .map(|(metric, score)| f64::from(score) * catalog.weight(metric))
        .sum();
    weighted.round() as u8
}
