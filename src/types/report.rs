use crate::types::judgment::Judgment;
use crate::types::thresholds::ThresholdSet;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub score: f64,
}

/// Everything the rendering sink needs for one selected day.
#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub score: f64,
    pub judgment: Judgment,
    pub stored_judgment: Option<String>,
    /// `None` when the stored label is absent or not a recognised label.
    pub agrees_with_stored: Option<bool>,
    /// How many records share `date`; the first in load order was used.
    pub matches: usize,
    pub thresholds: ThresholdSet,
    pub series: Vec<SeriesPoint>,
}

impl DailyReport {
    pub fn disagrees_with_stored(&self) -> bool {
        matches!(self.agrees_with_stored, Some(false))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryRow {
    pub date: NaiveDate,
    pub score: f64,
    pub judgment: Judgment,
    pub stored_judgment: Option<String>,
}
