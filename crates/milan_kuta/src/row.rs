//! Output rows.

use serde::Serialize;

/// Descriptor used when a value is unknown.
pub const EMPTY_DESCRIPTOR: &str = "-";

/// Score of one protocol for one body pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRow {
    /// Base protocol name.
    pub key: String,
    /// Key as requested, including any variant or scale suffix.
    pub variant_key: String,
    /// Label placeholder, resolved by an external dictionary.
    pub title: String,
    pub head: String,
    pub c1_value: String,
    pub c2_value: String,
    pub score: f64,
    pub max: f64,
    /// Active variant, when the protocol has variants.
    pub variant: Option<String>,
}

impl ScoreRow {
    /// Zero-valued row carrying only the identifying fields.
    pub fn zero(key: &str, variant_key: &str, head: String) -> Self {
        Self {
            key: key.to_string(),
            variant_key: variant_key.to_string(),
            title: format!("kuta/{key}"),
            head,
            c1_value: EMPTY_DESCRIPTOR.to_string(),
            c2_value: EMPTY_DESCRIPTOR.to_string(),
            score: 0.0,
            max: 0.0,
            variant: None,
        }
    }
}

/// All rows for one body pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub k1: String,
    pub k2: String,
    pub values: Vec<ScoreRow>,
}

/// `{ key, value }` projection of a score row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleRow {
    pub key: String,
    pub value: f64,
}

impl From<&ScoreRow> for SimpleRow {
    fn from(row: &ScoreRow) -> Self {
        Self {
            key: row.variant_key.clone(),
            value: row.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleResult {
    pub k1: String,
    pub k2: String,
    pub values: Vec<SimpleRow>,
}

impl From<&ResultRow> for SimpleResult {
    fn from(row: &ResultRow) -> Self {
        Self {
            k1: row.k1.clone(),
            k2: row.k2.clone(),
            values: row.values.iter().map(SimpleRow::from).collect(),
        }
    }
}
