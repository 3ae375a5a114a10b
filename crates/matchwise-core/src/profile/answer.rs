//! Raw answer kinds and log records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four raw answer kinds a question can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// The user wants this need satisfied: contributes `(1, 0)`.
    Yes,
    /// The user wants this need unsatisfied: contributes `(0, 1)`.
    No,
    /// The user cannot say: recorded, dilutes, never refutes.
    Unknown,
    /// The user does not care: the need leaves scoring entirely.
    Independent,
}

impl Answer {
    /// Stable wire label, matching the serde representation.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unknown => "unknown",
            Self::Independent => "independent",
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Answer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "unknown" => Ok(Self::Unknown),
            "independent" => Ok(Self::Independent),
            other => Err(format!("unknown answer kind `{other}`")),
        }
    }
}

/// One entry of the append-only answer log.
///
/// `ext` is the designated extension area of the serialized form; any
/// other unrecognized field is a schema error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerRecord {
    /// The need this answer addresses.
    pub need_id: String,
    /// The raw answer kind.
    pub answer: Answer,
    /// The question text that was asked, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// When the answer was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Extension area: opaque caller payload, preserved verbatim.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub ext: serde_json::Map<String, serde_json::Value>,
}

impl AnswerRecord {
    /// A minimal record with only the interpreted fields set.
    pub fn new(need_id: impl Into<String>, answer: Answer) -> Self {
        Self {
            need_id: need_id.into(),
            answer,
            question: None,
            timestamp: None,
            ext: Default::default(),
        }
    }
}
