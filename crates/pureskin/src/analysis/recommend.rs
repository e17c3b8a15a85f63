use serde::Serialize;

use super::catalog::Metric;
use super::risk::RiskLevel;
use super::scoring::ScoreVector;

/// Second-lowest metric must score below this for a lifestyle tip to fire.
pub const TIP_THRESHOLD: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Critical,
    Urgent,
    Care,
    Tip,
}

impl RecommendationKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Urgent => "urgent",
            Self::Care => "care",
            Self::Tip => "tip",
        }
    }
}

/// One care action. List order is significant: most severe first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: &'static str,
    pub description: &'static str,
}

struct PairRule {
    first: Metric,
    second: Metric,
    threshold: u8,
    kind: RecommendationKind,
    title: &'static str,
    description: &'static str,
}

/// Compound-condition rules checked top to bottom; only the first rule
/// whose both metrics fall below its threshold fires.
const PAIR_RULES: &[PairRule] = &[
    PairRule {
        first: Metric::Barrier,
        second: Metric::Redness,
        threshold: 60,
        kind: RecommendationKind::Urgent,
        title: "Calm and repair the barrier",
        description: "Irritation on top of a weakened barrier feeds on itself. Pause acids and \
                      retinoids, switch to a fragrance-free ceramide moisturizer, and reintroduce \
                      actives one at a time once the stinging stops.",
    },
    PairRule {
        first: Metric::Hydration,
        second: Metric::Barrier,
        threshold: 60,
        kind: RecommendationKind::Urgent,
        title: "Rebuild moisture defenses",
        description: "Dehydrated skin with a compromised barrier loses water faster than it can \
                      replace it. Layer a humectant serum under an occlusive cream morning and \
                      night for at least two weeks.",
    },
    PairRule {
        first: Metric::Sebum,
        second: Metric::Pores,
        threshold: 60,
        kind: RecommendationKind::Care,
        title: "Rebalance oil without stripping",
        description: "Excess sebum is congesting your pores. Use a gentle BHA exfoliant two or \
                      three evenings a week and a lightweight non-comedogenic moisturizer; harsh \
                      cleansers will only push oil production higher.",
    },
    PairRule {
        first: Metric::Texture,
        second: Metric::Pores,
        threshold: 60,
        kind: RecommendationKind::Care,
        title: "Smooth texture gradually",
        description: "Rough texture with visible pores responds best to slow, low-strength \
                      chemical exfoliation. Skip mechanical scrubs that inflame the surface and \
                      undo the progress.",
    },
    PairRule {
        first: Metric::Pigment,
        second: Metric::Texture,
        threshold: 65,
        kind: RecommendationKind::Care,
        title: "Even out tone",
        description: "Pair daily broad-spectrum sunscreen with a vitamin C or niacinamide serum. \
                      Pigment fades over weeks, so consistency matters far more than strength.",
    },
    PairRule {
        first: Metric::Hydration,
        second: Metric::Sebum,
        threshold: 60,
        kind: RecommendationKind::Care,
        title: "Hydrate oil-prone skin",
        description: "Shine alongside dehydration usually means the skin is over-compensating. \
                      Add water-based hydration before reaching for mattifying products.",
    },
];

struct FocusFallback {
    metric: Metric,
    title: &'static str,
    description: &'static str,
}

/// Single-metric advice used when no pairwise rule matches, keyed by the
/// worst-scoring metric.
const FOCUS_FALLBACKS: &[FocusFallback] = &[
    FocusFallback {
        metric: Metric::Hydration,
        title: "Prioritize hydration",
        description: "Moisture is your weakest measure. A hyaluronic acid serum on damp skin, \
                      sealed with a cream, lifts it faster than any other single change.",
    },
    FocusFallback {
        metric: Metric::Barrier,
        title: "Strengthen the skin barrier",
        description: "Cut back to a gentle cleanser, moisturizer, and sunscreen until tightness \
                      and flaking settle, then rebuild your routine step by step.",
    },
    FocusFallback {
        metric: Metric::Texture,
        title: "Refine skin texture",
        description: "A low-strength AHA twice a week smooths rough patches without the rebound \
                      irritation of daily exfoliation.",
    },
    FocusFallback {
        metric: Metric::Pigment,
        title: "Target uneven pigment",
        description: "Dark spots deepen with every unprotected exposure. Sunscreen every morning \
                      plus a brightening serum is the only combination that moves this score.",
    },
    FocusFallback {
        metric: Metric::Redness,
        title: "Reduce redness",
        description: "Favor lukewarm water, fragrance-free formulas, and a centella or azelaic \
                      acid product; heat and friction keep flushing active.",
    },
    FocusFallback {
        metric: Metric::Sebum,
        title: "Bring oil production down",
        description: "Niacinamide morning and evening regulates sebum over a few weeks. Avoid \
                      over-washing, which signals the skin to produce more.",
    },
    FocusFallback {
        metric: Metric::Pores,
        title: "Care for congested pores",
        description: "Pores are your lowest measure. A weekly clay mask and consistent evening \
                      cleansing keep congestion from hardening into blackheads.",
    },
];

/// Defensive default so the fallback lookup can never come up empty.
const GENERAL_FALLBACK: Recommendation = Recommendation {
    kind: RecommendationKind::Urgent,
    title: "Keep a consistent routine",
    description: "No single measure stands out, so protect the fundamentals: gentle cleansing, \
                  daily moisturizer, and morning sunscreen.",
};

const PROFESSIONAL_REFERRAL: Recommendation = Recommendation {
    kind: RecommendationKind::Critical,
    title: "See a dermatology professional",
    description: "Your answers describe changes that deserve an in-person evaluation. Book a \
                  dermatology appointment before adjusting your cosmetic routine; this \
                  assessment is not a diagnosis.",
};

struct LifestyleTip {
    metric: Metric,
    title: &'static str,
    description: &'static str,
}

const LIFESTYLE_TIPS: &[LifestyleTip] = &[
    LifestyleTip {
        metric: Metric::Hydration,
        title: "Drink and seal",
        description: "Keep water within reach through the day and apply moisturizer while skin \
                      is still damp from washing.",
    },
    LifestyleTip {
        metric: Metric::Barrier,
        title: "Protect while it heals",
        description: "Skip hot showers and new products this week; the barrier repairs itself \
                      when nothing interrupts it.",
    },
    LifestyleTip {
        metric: Metric::Texture,
        title: "Sleep on it",
        description: "Texture improves with sleep and sunscreen more reliably than with any \
                      exfoliant bought in a hurry.",
    },
    LifestyleTip {
        metric: Metric::Pigment,
        title: "Make sunscreen automatic",
        description: "Keep it next to your toothbrush; pigment care fails on the days you skip.",
    },
    LifestyleTip {
        metric: Metric::Redness,
        title: "Watch the triggers",
        description: "Spicy food, alcohol, and sudden temperature swings show up on reactive \
                      skin within the hour. Track which one moves yours.",
    },
    LifestyleTip {
        metric: Metric::Sebum,
        title: "Blot, don't strip",
        description: "Midday blotting papers remove shine without the rebound oiliness that \
                      another cleanse would cause.",
    },
    LifestyleTip {
        metric: Metric::Pores,
        title: "Hands off",
        description: "Squeezing stretches pore walls permanently; leave extractions to a \
                      professional.",
    },
];

/// Produce the prioritized care list for one analysis run. The result is
/// never empty: a critical referral leads on warning risk, then either the
/// first matching pairwise rule or the worst-metric fallback, then at most
/// one lifestyle tip for the runner-up metric.
pub fn recommend(scores: &ScoreVector, risk: RiskLevel) -> Vec<Recommendation> {
    let ranked = scores.ranked();
    let mut recommendations = Vec::new();

    if risk == RiskLevel::Warning {
        recommendations.push(PROFESSIONAL_REFERRAL);
    }

    let paired = PAIR_RULES.iter().find(|rule| {
        below(scores, rule.first, rule.threshold) && below(scores, rule.second, rule.threshold)
    });

    match paired {
        Some(rule) => recommendations.push(Recommendation {
            kind: rule.kind,
            title: rule.title,
            description: rule.description,
        }),
        None => {
            let fallback = ranked
                .first()
                .and_then(|(worst, _)| focus_fallback(*worst))
                .unwrap_or(GENERAL_FALLBACK);
            recommendations.push(fallback);
        }
    }

    if recommendations.len() < 2 {
        if let Some((second, score)) = ranked.get(1) {
            if *score < TIP_THRESHOLD {
                if let Some(tip) = lifestyle_tip(*second) {
                    recommendations.push(tip);
                }
            }
        }
    }

    recommendations
}

fn below(scores: &ScoreVector, metric: Metric, threshold: u8) -> bool {
    scores
        .get(metric)
        .map(|score| score < threshold)
        .unwrap_or(false)
}

fn focus_fallback(metric: Metric) -> Option<Recommendation> {
    FOCUS_FALLBACKS
        .iter()
        .find(|entry| entry.metric == metric)
        .map(|entry| Recommendation {
            kind: RecommendationKind::Urgent,
            title: entry.title,
            description: entry.description,
        })
}

fn lifestyle_tip(metric: Metric) -> Option<Recommendation> {
    LIFESTYLE_TIPS
        .iter()
        .find(|entry| entry.metric == metric)
        .map(|entry| Recommendation {
            kind: RecommendationKind::Tip,
            title: entry.title,
            description: entry.description,
        })
}
