use crate::store::dates::coerce_date;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sentiment-report",
    version,
    about = "Daily market-sentiment diagnosis from a precomputed score log"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file replacing ./sentiment.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the diagnosis for one day
    Show(ShowCommand),
    /// List scores and judgments over a date range
    History(HistoryCommand),
    /// Report accepted and rejected rows of the score log
    Check(CheckCommand),
    /// Print the effective thresholds and their bands
    Thresholds(ThresholdsCommand),
}

#[derive(Args)]
pub struct SourceArgs {
    /// Score log CSV (overrides source.score_log). Without a [source]
    /// section, headers date/score/judgment or 日付/スコア/判定 are read
    #[arg(long)]
    pub log: Option<PathBuf>,
}

#[derive(Args)]
pub struct ThresholdArgs {
    /// JSON file with four thresholds, e.g. [80, 60, 40, 20]
    #[arg(long)]
    pub thresholds: Option<PathBuf>,
}

#[derive(Args)]
pub struct ShowCommand {
    #[command(flatten)]
    pub source: SourceArgs,
    #[command(flatten)]
    pub thresholds: ThresholdArgs,
    /// Day to diagnose; defaults to the latest date in the log
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
    /// Exit with status 1 when the stored judgment disagrees
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct HistoryCommand {
    #[command(flatten)]
    pub source: SourceArgs,
    #[command(flatten)]
    pub thresholds: ThresholdArgs,
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args)]
pub struct ThresholdsCommand {
    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    coerce_date(raw).ok_or_else(|| format!("'{raw}' is not a recognised date (try YYYY-MM-DD)"))
}
