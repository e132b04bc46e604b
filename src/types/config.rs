use crate::error::ReportError;
use crate::types::thresholds::ThresholdSet;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_SCORE_LOG: &str = "score_log.csv";
pub const DEFAULT_CHART_WIDTH: usize = 60;
pub const DEFAULT_CHART_HEIGHT: usize = 12;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    pub source: Option<SourceSection>,
    pub thresholds: Option<ThresholdSection>,
    pub chart: Option<ChartSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceSection {
    pub score_log: Option<PathBuf>,
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_score_column")]
    pub score_column: String,
    #[serde(default = "default_label_column")]
    pub label_column: String,
    pub delimiter: Option<char>,
}

fn default_date_column() -> String {
    "date".to_string()
}

fn default_score_column() -> String {
    "score".to_string()
}

fn default_label_column() -> String {
    "judgment".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdSection {
    /// JSON file holding the persisted threshold array.
    pub file: Option<PathBuf>,
    pub values: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartSection {
    pub width: Option<usize>,
    pub height: Option<usize>,
}

/// Column layout and location of the score log, resolved from config and CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    pub path: PathBuf,
    pub date_column: String,
    pub score_column: String,
    pub label_column: String,
    pub delimiter: u8,
}

impl SourceConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            date_column: default_date_column(),
            score_column: default_score_column(),
            label_column: default_label_column(),
            delimiter: b',',
        }
    }
}

impl ReportConfig {
    /// Resolves the source settings, letting an explicit CLI path win.
    pub fn source_config(&self, cli_path: Option<PathBuf>) -> SourceConfig {
        let section = self.source.as_ref();
        let path = cli_path
            .or_else(|| section.and_then(|source| source.score_log.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORE_LOG));
        let mut resolved = SourceConfig::new(path);
        if let Some(source) = section {
            resolved.date_column = source.date_column.trim().to_string();
            resolved.score_column = source.score_column.trim().to_string();
            resolved.label_column = source.label_column.trim().to_string();
            if let Some(delimiter) = source.delimiter {
                resolved.delimiter = delimiter as u8;
            }
        }
        resolved
    }

    pub fn chart_size(&self) -> (usize, usize) {
        let chart = self.chart.as_ref();
        (
            chart
                .and_then(|chart| chart.width)
                .unwrap_or(DEFAULT_CHART_WIDTH),
            chart
                .and_then(|chart| chart.height)
                .unwrap_or(DEFAULT_CHART_HEIGHT),
        )
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        if let Some(source) = &self.source {
            for (key, value) in [
                ("date_column", &source.date_column),
                ("score_column", &source.score_column),
                ("label_column", &source.label_column),
            ] {
                if value.trim().is_empty() {
                    return Err(ReportError::ConfigParse(format!(
                        "source.{key} must be a non-empty column name"
                    )));
                }
            }
            if source.date_column.trim() == source.score_column.trim() {
                return Err(ReportError::ConfigParse(
                    "source.date_column and source.score_column must differ".to_string(),
                ));
            }
            if let Some(delimiter) = source.delimiter {
                if !delimiter.is_ascii() {
                    return Err(ReportError::ConfigParse(format!(
                        "source.delimiter must be a single ASCII character (found '{delimiter}')"
                    )));
                }
            }
        }

        if let Some(values) = self
            .thresholds
            .as_ref()
            .and_then(|thresholds| thresholds.values.as_ref())
        {
            ThresholdSet::from_persisted(values)
                .map_err(|e| ReportError::ConfigParse(format!("thresholds.values: {e}")))?;
        }

        if let Some(chart) = &self.chart {
            if chart.width.is_some_and(|width| width < 10) {
                return Err(ReportError::ConfigParse(
                    "chart.width must be at least 10".to_string(),
                ));
            }
            if chart.height.is_some_and(|height| height < 4) {
                return Err(ReportError::ConfigParse(
                    "chart.height must be at least 4".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: ReportConfig = toml::from_str("").expect("empty config should parse");
        let source = cfg.source_config(None);
        assert_eq!(source.path, PathBuf::from(DEFAULT_SCORE_LOG));
        assert_eq!(source.date_column, "date");
        assert_eq!(source.score_column, "score");
        assert_eq!(source.label_column, "judgment");
        assert_eq!(source.delimiter, b',');
        assert_eq!(cfg.chart_size(), (DEFAULT_CHART_WIDTH, DEFAULT_CHART_HEIGHT));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[source]
score_log = "data/ls_score_log.csv"
date_column = "日付"
score_column = "スコア"
label_column = "判定"
delimiter = ";"

[thresholds]
values = [85, 65, 45, 25]

[chart]
width = 40
height = 8
"#;
        let cfg: ReportConfig = toml::from_str(toml_str).expect("full config should parse");
        let source = cfg.source_config(None);
        assert_eq!(source.path, PathBuf::from("data/ls_score_log.csv"));
        assert_eq!(source.date_column, "日付");
        assert_eq!(source.delimiter, b';');
        assert_eq!(cfg.chart_size(), (40, 8));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn cli_path_overrides_configured_log() {
        let toml_str = r#"
[source]
score_log = "configured.csv"
"#;
        let cfg: ReportConfig = toml::from_str(toml_str).expect("config should parse");
        let source = cfg.source_config(Some(PathBuf::from("cli.csv")));
        assert_eq!(source.path, PathBuf::from("cli.csv"));
    }

    #[test]
    fn validate_rejects_out_of_order_threshold_values() {
        let toml_str = r#"
[thresholds]
values = [20, 40, 60, 80]
"#;
        let cfg: ReportConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("thresholds.values"));
    }

    #[test]
    fn validate_rejects_blank_column_names() {
        let toml_str = r#"
[source]
score_column = "  "
"#;
        let cfg: ReportConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("source.score_column"));
    }

    #[test]
    fn validate_rejects_tiny_chart() {
        let toml_str = r#"
[chart]
height = 2
"#;
        let cfg: ReportConfig = toml::from_str(toml_str).expect("config should parse");
        assert!(cfg.validate().is_err());
    }
}
