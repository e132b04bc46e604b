use crate::error::{ReportError, Result};
use crate::types::record::ScoreRecord;
use chrono::NaiveDate;

/// How to pick one record when several share the selected date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The record that appeared first in the source wins.
    #[default]
    FirstInLoadOrder,
}

#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub record: &'a ScoreRecord,
    pub matches: usize,
}

/// Score records in load order. Never mutated after loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSeries {
    records: Vec<ScoreRecord>,
}

impl ScoreSeries {
    pub fn new(records: Vec<ScoreRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latest(&self) -> Result<NaiveDate> {
        self.records
            .iter()
            .map(|record| record.date)
            .max()
            .ok_or(ReportError::EmptySeries)
    }

    pub fn earliest(&self) -> Result<NaiveDate> {
        self.records
            .iter()
            .map(|record| record.date)
            .min()
            .ok_or(ReportError::EmptySeries)
    }

    /// Exact-date lookup in load order. An empty result is not an error.
    pub fn find_by_date(&self, date: NaiveDate) -> Vec<&ScoreRecord> {
        self.records
            .iter()
            .filter(|record| record.date == date)
            .collect()
    }

    /// Ascending by date; ties keep load order.
    pub fn sorted_by_date(&self) -> Vec<&ScoreRecord> {
        let mut sorted = self.records.iter().collect::<Vec<_>>();
        sorted.sort_by_key(|record| record.date);
        sorted
    }

    /// Sorted records with `from <= date <= to`; open ends are unbounded.
    pub fn range(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Vec<&ScoreRecord> {
        self.sorted_by_date()
            .into_iter()
            .filter(|record| from.map_or(true, |from| record.date >= from))
            .filter(|record| to.map_or(true, |to| record.date <= to))
            .collect()
    }

    pub fn select(&self, date: NaiveDate, policy: DuplicatePolicy) -> Result<Selection<'_>> {
        let candidates = self.find_by_date(date);
        let matches = candidates.len();
        let record = match policy {
            DuplicatePolicy::FirstInLoadOrder => candidates.first().copied(),
        }
        .ok_or(ReportError::NoMatchForDate(date))?;

        if matches > 1 {
            tracing::warn!(
                %date,
                matches,
                line = record.line,
                "multiple records share the selected date; using the first in load order"
            );
        }
        Ok(Selection { record, matches })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn record(date: NaiveDate, score: f64, line: u64) -> ScoreRecord {
        ScoreRecord {
            date,
            score,
            stored_judgment: None,
            line,
        }
    }

    fn sample() -> ScoreSeries {
        ScoreSeries::new(vec![
            record(ymd(2024, 1, 8), 81.0, 2),
            record(ymd(2024, 1, 5), 72.3, 3),
            record(ymd(2024, 1, 8), 55.0, 4),
            record(ymd(2024, 1, 3), 12.0, 5),
        ])
    }

    #[test]
    fn latest_and_earliest_scan_all_records() {
        let series = sample();
        assert_eq!(series.latest().expect("latest"), ymd(2024, 1, 8));
        assert_eq!(series.earliest().expect("earliest"), ymd(2024, 1, 3));
    }

    #[test]
    fn latest_of_empty_series_is_an_error() {
        let err = ScoreSeries::default().latest().expect_err("should fail");
        assert!(matches!(err, ReportError::EmptySeries));
    }

    #[test]
    fn find_by_date_returns_all_matches_in_load_order() {
        let series = sample();
        let found = series.find_by_date(ymd(2024, 1, 8));
        assert_eq!(found.iter().map(|r| r.line).collect::<Vec<_>>(), vec![2, 4]);
        assert!(series.find_by_date(ymd(2024, 1, 6)).is_empty());
    }

    #[test]
    fn sorted_by_date_is_stable_for_ties() {
        let series = sample();
        let lines = series
            .sorted_by_date()
            .iter()
            .map(|r| r.line)
            .collect::<Vec<_>>();
        assert_eq!(lines, vec![5, 3, 2, 4]);
        // The underlying order is untouched.
        assert_eq!(series.records()[0].line, 2);
    }

    #[test]
    fn range_is_inclusive_and_sorted() {
        let series = sample();
        let lines = series
            .range(Some(ymd(2024, 1, 5)), Some(ymd(2024, 1, 8)))
            .iter()
            .map(|r| r.line)
            .collect::<Vec<_>>();
        assert_eq!(lines, vec![3, 2, 4]);
        assert_eq!(series.range(None, Some(ymd(2024, 1, 4))).len(), 1);
        assert_eq!(series.range(None, None).len(), 4);
    }

    #[test]
    fn select_takes_first_loaded_record_and_counts_matches() {
        let series = sample();
        let selection = series
            .select(ymd(2024, 1, 8), DuplicatePolicy::FirstInLoadOrder)
            .expect("should select");
        assert_eq!(selection.record.score, 81.0);
        assert_eq!(selection.matches, 2);
    }

    #[test]
    fn select_missing_date_is_no_match() {
        let err = sample()
            .select(ymd(2024, 1, 6), DuplicatePolicy::default())
            .expect_err("should fail");
        assert!(matches!(err, ReportError::NoMatchForDate(date) if date == ymd(2024, 1, 6)));
    }
}
