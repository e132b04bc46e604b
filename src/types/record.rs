use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    pub date: NaiveDate,
    pub score: f64,
    pub stored_judgment: Option<String>,
    /// 1-based line in the source file, header included.
    pub line: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    pub line: u64,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RejectReason {
    MissingDate,
    UnparseableDate(String),
    MissingScore,
    UnparseableScore(String),
    Malformed(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::MissingDate => write!(f, "missing date"),
            RejectReason::UnparseableDate(raw) => write!(f, "unparseable date '{raw}'"),
            RejectReason::MissingScore => write!(f, "missing score"),
            RejectReason::UnparseableScore(raw) => write!(f, "unparseable score '{raw}'"),
            RejectReason::Malformed(detail) => write!(f, "malformed row: {detail}"),
        }
    }
}
