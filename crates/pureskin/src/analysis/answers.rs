use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Question asking whether a mole or lesion has recently changed.
pub const LESION_CHANGE_QUESTION: u8 = 1;
/// Question asking about current symptoms (irritation, inflammation).
pub const SYMPTOM_QUESTION: u8 = 2;
/// Question asking for the self-assessed skin type.
pub const SKIN_TYPE_QUESTION: u8 = 3;

/// Closed vocabulary of selectable quiz answers across all questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerTag {
    LowRisk,
    MediumRisk,
    HighRisk,
    Clean,
    Sensitive,
    Inflammation,
    Dry,
    Combination,
    Oily,
}

impl AnswerTag {
    pub const fn key(self) -> &'static str {
        match self {
            Self::LowRisk => "low_risk",
            Self::MediumRisk => "medium_risk",
            Self::HighRisk => "high_risk",
            Self::Clean => "clean",
            Self::Sensitive => "sensitive",
            Self::Inflammation => "inflammation",
            Self::Dry => "dry",
            Self::Combination => "combination",
            Self::Oily => "oily",
        }
    }

    /// Strict lookup by wire key. Unknown strings are `None`, never an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low_risk" => Some(Self::LowRisk),
            "medium_risk" => Some(Self::MediumRisk),
            "high_risk" => Some(Self::HighRisk),
            "clean" => Some(Self::Clean),
            "sensitive" => Some(Self::Sensitive),
            "inflammation" => Some(Self::Inflammation),
            "dry" => Some(Self::Dry),
            "combination" => Some(Self::Combination),
            "oily" => Some(Self::Oily),
            _ => None,
        }
    }
}

/// Answers collected so far, keyed by question id. Partial and empty sets
/// are valid inputs; the engine treats missing answers as "no contribution".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet(BTreeMap<u8, AnswerTag>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question: u8, tag: AnswerTag) {
        self.0.insert(question, tag);
    }

    pub fn get(&self, question: u8) -> Option<AnswerTag> {
        self.0.get(&question).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, AnswerTag)> + '_ {
        self.0.iter().map(|(question, tag)| (*question, *tag))
    }
}

impl FromIterator<(u8, AnswerTag)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u8, AnswerTag)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Optional viewing angles the caller may have captured. Only presence
/// matters; image content never reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureAngle {
    Front,
    Left,
    Right,
    Closeup,
}

impl CaptureAngle {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Left => "left",
            Self::Right => "right",
            Self::Closeup => "closeup",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "front" => Some(Self::Front),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "closeup" => Some(Self::Closeup),
            _ => None,
        }
    }
}

/// Set of supplied viewing angles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureSet(BTreeSet<CaptureAngle>);

impl CaptureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, angle: CaptureAngle) {
        self.0.insert(angle);
    }

    pub fn contains(&self, angle: CaptureAngle) -> bool {
        self.0.contains(&angle)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CaptureAngle> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CaptureAngle> for CaptureSet {
    fn from_iter<I: IntoIterator<Item = CaptureAngle>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_tag() {
        for tag in [
            AnswerTag::LowRisk,
            AnswerTag::MediumRisk,
            AnswerTag::HighRisk,
            AnswerTag::Clean,
            AnswerTag::Sensitive,
            AnswerTag::Inflammation,
            AnswerTag::Dry,
            AnswerTag::Combination,
            AnswerTag::Oily,
        ] {
            assert_eq!(AnswerTag::parse(tag.key()), Some(tag));
        }
        assert_eq!(AnswerTag::parse("moist"), None);
    }

    #[test]
    fn answer_set_records_latest_answer_per_question() {
        let mut answers = AnswerSet::new();
        answers.record(SKIN_TYPE_QUESTION, AnswerTag::Dry);
        answers.record(SKIN_TYPE_QUESTION, AnswerTag::Oily);
        assert_eq!(answers.get(SKIN_TYPE_QUESTION), Some(AnswerTag::Oily));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn answer_set_serializes_as_object() {
        let answers: AnswerSet = [(LESION_CHANGE_QUESTION, AnswerTag::HighRisk)]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&answers).expect("serialize answers");
        assert_eq!(json, serde_json::json!({ "1": "high_risk" }));
    }

    #[test]
    fn capture_set_deduplicates() {
        let mut captures = CaptureSet::new();
        captures.record(CaptureAngle::Left);
        captures.record(CaptureAngle::Left);
        captures.record(CaptureAngle::Closeup);
        assert_eq!(captures.len(), 2);
        assert!(captures.contains(CaptureAngle::Closeup));
        assert!(!captures.contains(CaptureAngle::Front));
    }

    #[test]
    fn capture_angle_parse_matches_keys() {
        assert_eq!(CaptureAngle::parse("closeup"), Some(CaptureAngle::Closeup));
        assert_eq!(CaptureAngle::parse("side"), None);
    }
}
