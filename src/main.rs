mod chart;
mod classify;
mod cli;
mod config;
mod error;
mod logging;
mod pipeline;
mod present;
mod report;
mod store;
mod types;

use crate::chart::ChartOptions;
use crate::classify::ThresholdClassifier;
use crate::error::ReportError;
use crate::store::ScoreLogStore;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const NO_DATA: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Text => report::OutputFormat::Text,
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Json => report::OutputFormat::Json,
    }
}

fn run(cli: cli::Cli) -> Result<i32, ReportError> {
    let loaded = config::load_config(Path::new("."), cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Show(cmd) => {
            let thresholds =
                config::resolve_thresholds(&loaded, cmd.thresholds.thresholds.as_deref())?;
            let classifier = ThresholdClassifier::new(thresholds);
            let store = ScoreLogStore::new(loaded.source_config(cmd.source.log));
            let outcome = store.load()?;

            let daily = pipeline::diagnose(&outcome.series, &classifier, cmd.date)?;
            let (width, height) = loaded.chart_size();
            let rendered = report::render(
                &daily,
                output_format(&cmd.format),
                ChartOptions { width, height },
            )?;
            println!("{rendered}");

            if cmd.strict && daily.disagrees_with_stored() {
                eprintln!(
                    "warning: stored judgment '{}' differs from computed '{}'",
                    daily.stored_judgment.as_deref().unwrap_or_default(),
                    daily.judgment
                );
                return Ok(exit_code::WARNINGS);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::History(cmd) => {
            let thresholds =
                config::resolve_thresholds(&loaded, cmd.thresholds.thresholds.as_deref())?;
            let classifier = ThresholdClassifier::new(thresholds);
            let store = ScoreLogStore::new(loaded.source_config(cmd.source.log));
            let outcome = store.load()?;
            if outcome.series.is_empty() {
                return Err(ReportError::EmptySeries);
            }

            let rows = pipeline::history(&outcome.series, &classifier, cmd.from, cmd.to);
            println!("{}", report::render_history(&rows, output_format(&cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let store = ScoreLogStore::new(loaded.source_config(cmd.source.log));
            let outcome = store.load()?;

            println!("source: {}", store.source().path.display());
            println!("rows read: {}", outcome.rows_read());
            println!("accepted: {}", outcome.series.len());
            println!("rejected: {}", outcome.rejected.len());
            if let (Ok(earliest), Ok(latest)) =
                (outcome.series.earliest(), outcome.series.latest())
            {
                println!("date span: {earliest} .. {latest}");
            }
            for row in &outcome.rejected {
                println!("  line {}: {}", row.line, row.reason);
            }

            if outcome.rejected.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Thresholds(cmd) => {
            let thresholds =
                config::resolve_thresholds(&loaded, cmd.thresholds.thresholds.as_deref())?;
            let classifier = ThresholdClassifier::new(thresholds);
            println!("thresholds: {:?}", classifier.thresholds().cutoffs());
            for (judgment, band) in classifier.bands() {
                println!("- {:<14} {}", judgment.label(), band);
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    logging::init_cli_logger(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) if e.is_no_data() => {
            eprintln!("warning: {}", e);
            std::process::exit(exit_code::NO_DATA);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
