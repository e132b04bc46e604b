pub mod json;
pub mod md;
pub mod text;

use crate::chart::ChartOptions;
use crate::error::ReportError;
use crate::types::report::{DailyReport, HistoryRow};

pub const DISCLAIMER: &str = "Scores are statistical diagnostics of past market data, not investment advice.";

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Md,
    Json,
}

pub fn render(
    report: &DailyReport,
    format: OutputFormat,
    chart: ChartOptions,
) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report, chart)),
        OutputFormat::Md => Ok(md::to_markdown(report, chart)),
        OutputFormat::Json => json::to_json(report).map_err(ReportError::Json),
    }
}

pub fn render_history(rows: &[HistoryRow], format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(text::history_to_text(rows)),
        OutputFormat::Md => Ok(md::history_to_markdown(rows)),
        OutputFormat::Json => json::history_to_json(rows).map_err(ReportError::Json),
    }
}

/// One-line agreement note shared by the text and markdown forms.
pub(crate) fn agreement_note(report: &DailyReport) -> &'static str {
    match report.agrees_with_stored {
        Some(true) => "matches stored judgment",
        Some(false) => "differs from stored judgment",
        None => "stored judgment not comparable",
    }
}
