use crate::classify::ThresholdClassifier;
use crate::error::Result;
use crate::store::{DuplicatePolicy, ScoreSeries};
use crate::types::judgment::Judgment;
use crate::types::report::{DailyReport, HistoryRow, SeriesPoint};
use chrono::NaiveDate;

/// Builds the report for one day, defaulting to the latest date in the series.
pub fn diagnose(
    series: &ScoreSeries,
    classifier: &ThresholdClassifier,
    date: Option<NaiveDate>,
) -> Result<DailyReport> {
    let date = match date {
        Some(date) => date,
        None => series.latest()?,
    };
    let selection = series.select(date, DuplicatePolicy::FirstInLoadOrder)?;
    let record = selection.record;
    let judgment = classifier.classify(record.score);
    let agrees_with_stored = record
        .stored_judgment
        .as_deref()
        .and_then(Judgment::from_label)
        .map(|stored| stored == judgment);

    tracing::debug!(%date, score = record.score, %judgment, "classified selected day");

    Ok(DailyReport {
        date,
        score: record.score,
        judgment,
        stored_judgment: record.stored_judgment.clone(),
        agrees_with_stored,
        matches: selection.matches,
        thresholds: *classifier.thresholds(),
        series: series
            .sorted_by_date()
            .into_iter()
            .map(|record| SeriesPoint {
                date: record.date,
                score: record.score,
            })
            .collect(),
    })
}

pub fn history(
    series: &ScoreSeries,
    classifier: &ThresholdClassifier,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<HistoryRow> {
    series
        .range(from, to)
        .into_iter()
        .map(|record| HistoryRow {
            date: record.date,
            score: record.score,
            judgment: classifier.classify(record.score),
            stored_judgment: record.stored_judgment.clone(),
        })
        .collect()
}
