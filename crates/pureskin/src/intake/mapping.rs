use std::collections::HashMap;
use std::sync::OnceLock;

use crate::analysis::{AnswerTag, CaptureAngle};

use super::normalizer::normalize_token;

static LESION_CHANGE_MAP: OnceLock<HashMap<String, AnswerTag>> = OnceLock::new();
static SYMPTOM_MAP: OnceLock<HashMap<String, AnswerTag>> = OnceLock::new();
static SKIN_TYPE_MAP: OnceLock<HashMap<String, AnswerTag>> = OnceLock::new();
static CAPTURE_MAP: OnceLock<HashMap<String, CaptureAngle>> = OnceLock::new();

pub(crate) fn lesion_change_tag(normalized: &str) -> Option<AnswerTag> {
    lesion_change_map().get(normalized).copied()
}

pub(crate) fn symptom_tag(normalized: &str) -> Option<AnswerTag> {
    symptom_map().get(normalized).copied()
}

pub(crate) fn skin_type_tag(normalized: &str) -> Option<AnswerTag> {
    skin_type_map().get(normalized).copied()
}

pub(crate) fn capture_angle(normalized: &str) -> Option<CaptureAngle> {
    capture_map().get(normalized).copied()
}

fn lesion_change_map() -> &'static HashMap<String, AnswerTag> {
    LESION_CHANGE_MAP.get_or_init(|| {
        const SYNONYMS: &[(&str, AnswerTag)] = &[
            ("No", AnswerTag::LowRisk),
            ("No Change", AnswerTag::LowRisk),
            ("None", AnswerTag::LowRisk),
            ("Stable", AnswerTag::LowRisk),
            ("Low Risk", AnswerTag::LowRisk),
            ("low_risk", AnswerTag::LowRisk),
            ("Not Sure", AnswerTag::MediumRisk),
            ("Unsure", AnswerTag::MediumRisk),
            ("Possibly", AnswerTag::MediumRisk),
            ("Medium Risk", AnswerTag::MediumRisk),
            ("medium_risk", AnswerTag::MediumRisk),
            ("Yes", AnswerTag::HighRisk),
            ("Changed", AnswerTag::HighRisk),
            ("New or Changing", AnswerTag::HighRisk),
            ("Growing", AnswerTag::HighRisk),
            ("High Risk", AnswerTag::HighRisk),
            ("high_risk", AnswerTag::HighRisk),
        ];
        build_map(SYNONYMS)
    })
}

fn symptom_map() -> &'static HashMap<String, AnswerTag> {
    SYMPTOM_MAP.get_or_init(|| {
        const SYNONYMS: &[(&str, AnswerTag)] = &[
            ("None", AnswerTag::Clean),
            ("No Symptoms", AnswerTag::Clean),
            ("Clear", AnswerTag::Clean),
            ("Clean", AnswerTag::Clean),
            ("Itching", AnswerTag::Sensitive),
            ("Itchy", AnswerTag::Sensitive),
            ("Tingling", AnswerTag::Sensitive),
            ("Sensitive", AnswerTag::Sensitive),
            ("Bleeding", AnswerTag::Inflammation),
            ("Crusting", AnswerTag::Inflammation),
            ("Inflamed", AnswerTag::Inflammation),
            ("Inflammation", AnswerTag::Inflammation),
            ("Painful", AnswerTag::Inflammation),
        ];
        build_map(SYNONYMS)
    })
}

fn skin_type_map() -> &'static HashMap<String, AnswerTag> {
    SKIN_TYPE_MAP.get_or_init(|| {
        const SYNONYMS: &[(&str, AnswerTag)] = &[
            ("Dry", AnswerTag::Dry),
            ("Tight or Flaky", AnswerTag::Dry),
            ("Flaky", AnswerTag::Dry),
            ("Combination", AnswerTag::Combination),
            ("Combo", AnswerTag::Combination),
            ("Normal", AnswerTag::Combination),
            ("Mixed", AnswerTag::Combination),
            ("Oily", AnswerTag::Oily),
            ("Greasy", AnswerTag::Oily),
            ("Shiny", AnswerTag::Oily),
        ];
        build_map(SYNONYMS)
    })
}

fn capture_map() -> &'static HashMap<String, CaptureAngle> {
    CAPTURE_MAP.get_or_init(|| {
        const SYNONYMS: &[(&str, CaptureAngle)] = &[
            ("Front", CaptureAngle::Front),
            ("Front View", CaptureAngle::Front),
            ("Center", CaptureAngle::Front),
            ("Left", CaptureAngle::Left),
            ("Left Side", CaptureAngle::Left),
            ("Left Profile", CaptureAngle::Left),
            ("Right", CaptureAngle::Right),
            ("Right Side", CaptureAngle::Right),
            ("Right Profile", CaptureAngle::Right),
            ("Closeup", CaptureAngle::Closeup),
            ("Close-Up", CaptureAngle::Closeup),
            ("Close Up", CaptureAngle::Closeup),
            ("Macro", CaptureAngle::Closeup),
            ("Detail", CaptureAngle::Closeup),
        ];
        build_map(SYNONYMS)
    })
}

fn build_map<T: Copy>(synonyms: &[(&str, T)]) -> HashMap<String, T> {
    let mut map = HashMap::with_capacity(synonyms.len());
    for (name, value) in synonyms {
        map.insert(normalize_token(name), *value);
    }
    map
}

#[cfg(test)]
pub(crate) fn lookup_answer_for_tests(question: u8, value: &str) -> Option<AnswerTag> {
    let normalized = normalize_token(value);
    match question {
        crate::analysis::LESION_CHANGE_QUESTION => lesion_change_tag(&normalized),
        crate::analysis::SYMPTOM_QUESTION => symptom_tag(&normalized),
        crate::analysis::SKIN_TYPE_QUESTION => skin_type_tag(&normalized),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) fn lookup_capture_for_tests(value: &str) -> Option<CaptureAngle> {
    let normalized = normalize_token(value);
    capture_angle(&normalized)
}
