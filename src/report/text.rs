use super::{agreement_note, DISCLAIMER};
use crate::chart::{render_chart, ChartOptions};
use crate::present::present;
use crate::types::report::{DailyReport, HistoryRow};

pub fn to_text(report: &DailyReport, chart: ChartOptions) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Diagnosis date   {}\n",
        report.date.format("%Y-%m-%d")
    ));
    output.push_str(&format!("Score            {}\n", present(report.score)));
    output.push_str(&format!("Judgment         {}\n", report.judgment));
    output.push_str(&format!(
        "Stored judgment  {} ({})\n",
        present(report.stored_judgment.clone()),
        agreement_note(report)
    ));
    if report.matches > 1 {
        output.push_str(&format!(
            "Note             {} records share this date; showing the first loaded\n",
            report.matches
        ));
    }
    output.push('\n');
    output.push_str("Score history\n");
    output.push_str(&render_chart(&report.series, &report.thresholds, chart));
    output.push('\n');
    output.push_str(DISCLAIMER);
    output.push('\n');
    output
}

pub fn history_to_text(rows: &[HistoryRow]) -> String {
    if rows.is_empty() {
        return "history: no records in range\n".to_string();
    }
    let mut output = format!(
        "{:<10}  {:>8}  {:<14}  {}\n",
        "date", "score", "judgment", "stored"
    );
    for row in rows {
        output.push_str(&format!(
            "{:<10}  {:>8}  {:<14}  {}\n",
            row.date.format("%Y-%m-%d").to_string(),
            present(row.score).to_string(),
            row.judgment.label(),
            present(row.stored_judgment.clone())
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::judgment::Judgment;
    use crate::types::report::SeriesPoint;
    use crate::types::thresholds::ThresholdSet;
    use chrono::NaiveDate;

    #[test]
    fn text_report_lists_metrics_and_chart() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date");
        let report = DailyReport {
            date,
            score: 72.3,
            judgment: Judgment::MildBullish,
            stored_judgment: Some("Neutral".to_string()),
            agrees_with_stored: Some(false),
            matches: 1,
            thresholds: ThresholdSet::default(),
            series: vec![SeriesPoint { date, score: 72.3 }],
        };
        let rendered = to_text(&report, ChartOptions::default());
        assert!(rendered.contains("Diagnosis date   2024-01-05"));
        assert!(rendered.contains("Score            72.30"));
        assert!(rendered.contains("Judgment         Mild-bullish"));
        assert!(rendered.contains("Stored judgment  Neutral (differs from stored judgment)"));
        assert!(rendered.contains("Score history"));
        assert!(rendered.contains('*'));
    }

    #[test]
    fn text_history_aligns_columns() {
        let rows = vec![HistoryRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 8).expect("valid date"),
            score: 81.0,
            judgment: Judgment::StrongBullish,
            stored_judgment: Some("Strong-bullish".to_string()),
        }];
        let rendered = history_to_text(&rows);
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("date"));
        assert!(lines[1].contains("81.00"));
        assert!(lines[1].contains("Strong-bullish"));
    }
}
