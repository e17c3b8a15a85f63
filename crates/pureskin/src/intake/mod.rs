//! Batch intake for partner session exports.
//!
//! Partners hand over CSV exports of completed questionnaires, one session
//! per row. Column values arrive in whatever wording the partner's form
//! used, so rows are normalized and mapped through synonym tables before
//! they reach the engine. Values with no known mapping are skipped rather
//! than rejected.

mod mapping;
mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use crate::analysis::{
    AnswerSet, CaptureSet, LESION_CHANGE_QUESTION, SKIN_TYPE_QUESTION, SYMPTOM_QUESTION,
};

use parser::IntakeRecord;

#[derive(Debug)]
pub enum SessionIntakeError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for SessionIntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionIntakeError::Io(err) => write!(f, "failed to read session export: {}", err),
            SessionIntakeError::Csv(err) => write!(f, "invalid session CSV data: {}", err),
        }
    }
}

impl std::error::Error for SessionIntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionIntakeError::Io(err) => Some(err),
            SessionIntakeError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SessionIntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for SessionIntakeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One imported row, ready to feed the analysis engine.
#[derive(Debug, Clone)]
pub struct RecordedSession {
    pub session_id: String,
    pub answers: AnswerSet,
    pub captures: CaptureSet,
}

pub struct SessionIntake;

impl SessionIntake {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RecordedSession>, SessionIntakeError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RecordedSession>, SessionIntakeError> {
        let mut sessions = Vec::new();

        for record in parser::parse_records(reader)? {
            sessions.push(session_from_record(record));
        }

        Ok(sessions)
    }
}

fn session_from_record(record: IntakeRecord) -> RecordedSession {
    let mut answers = AnswerSet::new();
    if let Some(tag) = record
        .lesion_change
        .as_deref()
        .and_then(mapping::lesion_change_tag)
    {
        answers.record(LESION_CHANGE_QUESTION, tag);
    }
    if let Some(tag) = record.symptom.as_deref().and_then(mapping::symptom_tag) {
        answers.record(SYMPTOM_QUESTION, tag);
    }
    if let Some(tag) = record.skin_type.as_deref().and_then(mapping::skin_type_tag) {
        answers.record(SKIN_TYPE_QUESTION, tag);
    }

    let mut captures = CaptureSet::new();
    for token in &record.captures {
        if let Some(angle) = mapping::capture_angle(token) {
            captures.record(angle);
        }
    }

    RecordedSession {
        session_id: record.session_id,
        answers,
        captures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnswerTag, CaptureAngle};
    use std::io::Cursor;

    const HEADER: &str = "Session ID,Lesion Change,Symptom,Skin Type,Captures\n";

    #[test]
    fn normalize_strips_bom_and_collapses_case() {
        let source = "\u{feff}New  or  Changing";
        let normalized = normalizer::normalize_for_tests(source);
        assert_eq!(normalized, "new or changing");
    }

    #[test]
    fn mapping_recognizes_answer_synonyms() {
        assert_eq!(
            mapping::lookup_answer_for_tests(LESION_CHANGE_QUESTION, "New or Changing"),
            Some(AnswerTag::HighRisk)
        );
        assert_eq!(
            mapping::lookup_answer_for_tests(SYMPTOM_QUESTION, "Bleeding"),
            Some(AnswerTag::Inflammation)
        );
        assert_eq!(
            mapping::lookup_answer_for_tests(SKIN_TYPE_QUESTION, "Tight or Flaky"),
            Some(AnswerTag::Dry)
        );
        assert_eq!(
            mapping::lookup_answer_for_tests(SKIN_TYPE_QUESTION, "Granite"),
            None
        );
    }

    #[test]
    fn mapping_recognizes_capture_synonyms() {
        assert_eq!(
            mapping::lookup_capture_for_tests("Close-Up"),
            Some(CaptureAngle::Closeup)
        );
        assert_eq!(
            mapping::lookup_capture_for_tests("Left Profile"),
            Some(CaptureAngle::Left)
        );
        assert_eq!(mapping::lookup_capture_for_tests("Rear"), None);
    }

    #[test]
    fn intake_maps_rows_onto_answer_tags() {
        let csv = format!(
            "{HEADER}scan-000101,Yes,Bleeding,Dry,front|left|right\n\
scan-000102,No Change,None,Combination,front\n"
        );
        let sessions =
            SessionIntake::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(sessions.len(), 2);
        let first = &sessions[0];
        assert_eq!(first.session_id, "scan-000101");
        assert_eq!(
            first.answers.get(LESION_CHANGE_QUESTION),
            Some(AnswerTag::HighRisk)
        );
        assert_eq!(
            first.answers.get(SYMPTOM_QUESTION),
            Some(AnswerTag::Inflammation)
        );
        assert_eq!(first.answers.get(SKIN_TYPE_QUESTION), Some(AnswerTag::Dry));
        assert_eq!(first.captures.len(), 3);
        assert!(first.captures.contains(CaptureAngle::Left));

        let second = &sessions[1];
        assert_eq!(
            second.answers.get(LESION_CHANGE_QUESTION),
            Some(AnswerTag::LowRisk)
        );
        assert_eq!(second.captures.len(), 1);
    }

    #[test]
    fn intake_skips_values_it_cannot_map() {
        let csv = format!("{HEADER}scan-000103,Perhaps?,Sparkly,Granite,side|rear\n");
        let sessions =
            SessionIntake::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(sessions.len(), 1);
        assert!(sessions[0].answers.is_empty());
        assert!(sessions[0].captures.is_empty());
    }

    #[test]
    fn intake_tolerates_blank_columns() {
        let csv = format!("{HEADER}scan-000104,,,,\n");
        let sessions =
            SessionIntake::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].session_id, "scan-000104");
        assert!(sessions[0].answers.is_empty());
        assert!(sessions[0].captures.is_empty());
    }

    #[test]
    fn intake_deduplicates_capture_tokens() {
        let csv = format!("{HEADER}scan-000105,Yes,None,Oily,front|front|left\n");
        let sessions =
            SessionIntake::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(sessions[0].captures.len(), 2);
    }

    #[test]
    fn intake_from_path_propagates_io_errors() {
        let error =
            SessionIntake::from_path("./does-not-exist.csv").expect_err("expected io error");

        match error {
            SessionIntakeError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
