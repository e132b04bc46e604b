use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("score log unavailable: {path}: {reason}")]
    SourceUnavailable { path: String, reason: String },

    #[error("score log contains no usable records")]
    EmptySeries,

    #[error("no diagnosis recorded for {0}")]
    NoMatchForDate(NaiveDate),

    #[error("score log {path} is missing required column '{column}'")]
    MissingColumn { column: String, path: String },

    #[error("invalid thresholds: {0}")]
    InvalidThresholds(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    /// Errors that mean "valid source, nothing to show" rather than a broken run.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::EmptySeries | Self::NoMatchForDate(_))
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
