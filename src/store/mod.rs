pub mod dates;
pub mod series;

pub use series::{DuplicatePolicy, ScoreSeries};

use crate::error::{ReportError, Result};
use crate::types::config::SourceConfig;
use crate::types::record::{RejectReason, RejectedRow, ScoreRecord};
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;

const NULL_MARKERS: [&str; 6] = ["nan", "na", "n/a", "null", "none", "-"];

/// Headers written by the upstream score log, tried when the default
/// column name is not present.
const UPSTREAM_HEADERS: [(&str, &str); 3] = [
    ("date", "日付"),
    ("score", "スコア"),
    ("judgment", "判定"),
];

/// Result of a load: the usable series plus every row that was left out.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub series: ScoreSeries,
    pub rejected: Vec<RejectedRow>,
}

impl LoadOutcome {
    pub fn rows_read(&self) -> usize {
        self.series.len() + self.rejected.len()
    }
}

#[derive(Debug, Clone)]
pub struct ScoreLogStore {
    source: SourceConfig,
}

struct Columns {
    date: usize,
    score: usize,
    label: Option<usize>,
}

impl ScoreLogStore {
    pub fn new(source: SourceConfig) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &SourceConfig {
        &self.source
    }

    pub fn load(&self) -> Result<LoadOutcome> {
        let path = &self.source.path;
        let file = File::open(path).map_err(|e| ReportError::SourceUnavailable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let outcome = self.load_from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            accepted = outcome.series.len(),
            rejected = outcome.rejected.len(),
            "loaded score log"
        );
        Ok(outcome)
    }

    /// Parses a score log from any reader. Bad rows are collected, not fatal.
    ///
    /// Cells are decoded lossily, so invalid UTF-8 in the label never drops
    /// an otherwise valid row.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<LoadOutcome> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.source.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers().map_err(|e| self.unreadable(e))?.clone();
        let columns = self.locate_columns(&headers)?;

        let mut records = Vec::new();
        let mut rejected = Vec::new();
        for row in csv_reader.byte_records() {
            let row = match row {
                Ok(row) => row,
                Err(e) if e.is_io_error() => return Err(self.unreadable(e)),
                Err(e) => {
                    let line = e.position().map_or(0, |pos| pos.line());
                    rejected.push(RejectedRow {
                        line,
                        reason: RejectReason::Malformed(e.to_string()),
                    });
                    continue;
                }
            };
            let line = row.position().map_or(0, |pos| pos.line());
            match parse_row(&row, &columns) {
                Ok((date, score, stored_judgment)) => records.push(ScoreRecord {
                    date,
                    score,
                    stored_judgment,
                    line,
                }),
                Err(reason) => {
                    tracing::debug!(line, %reason, "dropping score log row");
                    rejected.push(RejectedRow { line, reason });
                }
            }
        }

        Ok(LoadOutcome {
            series: ScoreSeries::new(records),
            rejected,
        })
    }

    fn locate_columns(&self, headers: &csv::StringRecord) -> Result<Columns> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim_start_matches('\u{feff}').trim() == name)
        };
        let find = |name: &str| {
            position(name).or_else(|| {
                UPSTREAM_HEADERS
                    .iter()
                    .find(|(default, _)| *default == name)
                    .and_then(|&(_, upstream)| position(upstream))
            })
        };
        let required = |name: &str| {
            find(name).ok_or_else(|| ReportError::MissingColumn {
                column: name.to_string(),
                path: self.source.path.display().to_string(),
            })
        };

        let label = find(&self.source.label_column);
        if label.is_none() {
            tracing::debug!(
                column = %self.source.label_column,
                "label column absent; stored judgments will be empty"
            );
        }
        Ok(Columns {
            date: required(&self.source.date_column)?,
            score: required(&self.source.score_column)?,
            label,
        })
    }

    fn unreadable(&self, e: csv::Error) -> ReportError {
        ReportError::SourceUnavailable {
            path: self.source.path.display().to_string(),
            reason: e.to_string(),
        }
    }
}

fn cell(row: &csv::ByteRecord, idx: usize) -> Cow<'_, str> {
    row.get(idx)
        .map(String::from_utf8_lossy)
        .unwrap_or(Cow::Borrowed(""))
}

fn parse_row(
    row: &csv::ByteRecord,
    columns: &Columns,
) -> std::result::Result<(chrono::NaiveDate, f64, Option<String>), RejectReason> {
    let raw_date = cell(row, columns.date);
    if is_null(&raw_date) {
        return Err(RejectReason::MissingDate);
    }
    let date = dates::coerce_date(&raw_date)
        .ok_or_else(|| RejectReason::UnparseableDate(raw_date.to_string()))?;

    let raw_score = cell(row, columns.score);
    if is_null(&raw_score) {
        return Err(RejectReason::MissingScore);
    }
    let score = raw_score
        .parse::<f64>()
        .ok()
        .filter(|score| !score.is_nan())
        .ok_or_else(|| RejectReason::UnparseableScore(raw_score.to_string()))?;

    let stored_judgment = columns
        .label
        .map(|idx| cell(row, idx))
        .filter(|label| !is_null(label))
        .map(Cow::into_owned);

    Ok((date, score, stored_judgment))
}

fn is_null(raw: &str) -> bool {
    let value = raw.trim();
    value.is_empty() || NULL_MARKERS.iter().any(|marker| value.eq_ignore_ascii_case(marker))
}
