use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::normalizer::normalize_token;

/// One CSV row after trimming and normalization, before synonym mapping.
#[derive(Debug)]
pub(crate) struct IntakeRecord {
    pub(crate) session_id: String,
    pub(crate) lesion_change: Option<String>,
    pub(crate) symptom: Option<String>,
    pub(crate) skin_type: Option<String>,
    pub(crate) captures: Vec<String>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<IntakeRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<IntakeRow>() {
        let row = record?;
        let captures = row.capture_tokens();

        records.push(IntakeRecord {
            session_id: row.session_id,
            lesion_change: row.lesion_change.as_deref().map(normalize_token),
            symptom: row.symptom.as_deref().map(normalize_token),
            skin_type: row.skin_type.as_deref().map(normalize_token),
            captures,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct IntakeRow {
    #[serde(rename = "Session ID")]
    session_id: String,
    #[serde(
        rename = "Lesion Change",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    lesion_change: Option<String>,
    #[serde(rename = "Symptom", default, deserialize_with = "empty_string_as_none")]
    symptom: Option<String>,
    #[serde(
        rename = "Skin Type",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    skin_type: Option<String>,
    #[serde(rename = "Captures", default, deserialize_with = "empty_string_as_none")]
    captures: Option<String>,
}

impl IntakeRow {
    // The capture column packs several angles into one field, separated
    // by pipes.
    fn capture_tokens(&self) -> Vec<String> {
        self.captures
            .as_deref()
            .map(|value| {
                value
                    .split('|')
                    .map(normalize_token)
                    .filter(|token| !token.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
