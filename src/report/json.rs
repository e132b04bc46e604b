use crate::types::report::{DailyReport, HistoryRow};

pub fn to_json(report: &DailyReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn history_to_json(rows: &[HistoryRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}
