use super::{agreement_note, DISCLAIMER};
use crate::chart::{render_chart, ChartOptions};
use crate::present::present;
use crate::types::report::{DailyReport, HistoryRow};

pub fn to_markdown(report: &DailyReport, chart: ChartOptions) -> String {
    let mut output = String::new();
    output.push_str("# Market Sentiment Diagnosis\n\n");
    output.push_str(&format!(
        "Diagnosis date: {}\n\n",
        report.date.format("%Y-%m-%d")
    ));
    output.push_str("## Result\n\n");
    output.push_str(&format!(
        "- score: {}\n- judgment: {}\n- stored judgment: {} ({})\n",
        present(report.score),
        report.judgment,
        present(report.stored_judgment.clone()),
        agreement_note(report)
    ));
    if report.matches > 1 {
        output.push_str(&format!(
            "- note: {} records share this date; the first loaded one is shown\n",
            report.matches
        ));
    }
    output.push('\n');

    let [t1, t2, t3, t4] = report.thresholds.cutoffs();
    output.push_str("## Score History\n\n");
    output.push_str(&format!(
        "Thresholds: {} / {} / {} / {}\n\n",
        present(t1),
        present(t2),
        present(t3),
        present(t4)
    ));
    output.push_str("```text\n");
    output.push_str(&render_chart(&report.series, &report.thresholds, chart));
    output.push_str("```\n\n");

    output.push_str(&format!("> {DISCLAIMER}\n"));
    output
}

pub fn history_to_markdown(rows: &[HistoryRow]) -> String {
    let mut output = String::new();
    output.push_str("# Score History\n\n");
    if rows.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    output.push_str("| date | score | judgment | stored |\n");
    output.push_str("|---|---|---|---|\n");
    for row in rows {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            row.date.format("%Y-%m-%d"),
            present(row.score),
            row.judgment,
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

    fn report(matches: usize, stored: Option<&str>) -> DailyReport {
        let date = NaiveDate::from_ymd_opt(2024, 1, 8).expect("valid date");
        DailyReport {
            date,
            score: 81.004,
            judgment: Judgment::StrongBullish,
            stored_judgment: stored.map(str::to_string),
            agrees_with_stored: stored.map(|_| true),
            matches,
            thresholds: ThresholdSet::default(),
            series: vec![SeriesPoint { date, score: 81.004 }],
        }
    }

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&report(1, Some("Strong-bullish")), ChartOptions::default());
        assert!(rendered.contains("# Market Sentiment Diagnosis"));
        assert!(rendered.contains("Diagnosis date: 2024-01-08"));
        assert!(rendered.contains("- score: 81.00"));
        assert!(rendered.contains("- judgment: Strong-bullish"));
        assert!(rendered.contains("matches stored judgment"));
        assert!(rendered.contains("## Score History"));
        assert!(rendered.contains("Thresholds: 80.00 / 60.00 / 40.00 / 20.00"));
        assert!(!rendered.contains("records share this date"));
    }

    #[test]
    fn markdown_report_marks_missing_label_and_duplicates() {
        let rendered = to_markdown(&report(3, None), ChartOptions::default());
        assert!(rendered.contains("- stored judgment: unavailable"));
        assert!(rendered.contains("3 records share this date"));
    }

    #[test]
    fn markdown_history_renders_table() {
        let rows = vec![HistoryRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date"),
            score: 72.3,
            judgment: Judgment::MildBullish,
            stored_judgment: None,
        }];
        let rendered = history_to_markdown(&rows);
        assert!(rendered.contains("| 2024-01-05 | 72.30 | Mild-bullish | unavailable |"));
        assert!(history_to_markdown(&[]).contains("- none"));
    }
}
