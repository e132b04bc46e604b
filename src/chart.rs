//! Plain-text trend chart with threshold reference lines.

use crate::types::report::SeriesPoint;
use crate::types::thresholds::ThresholdSet;

const LABEL_WIDTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub width: usize,
    pub height: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: crate::types::config::DEFAULT_CHART_WIDTH,
            height: crate::types::config::DEFAULT_CHART_HEIGHT,
        }
    }
}

/// Renders `points` (already sorted by date) as an ASCII chart.
///
/// Each threshold is a dashed row labelled with its value; scores are `*`.
/// When there are more points than columns, each column shows the mean of
/// its bucket. Non-finite scores are not plotted.
pub fn render_chart(
    points: &[SeriesPoint],
    thresholds: &ThresholdSet,
    opts: ChartOptions,
) -> String {
    let plotted = points
        .iter()
        .filter(|point| point.score.is_finite())
        .collect::<Vec<_>>();
    let (first, last) = match (plotted.first(), plotted.last()) {
        (Some(first), Some(last)) => (first.date, last.date),
        _ => return "(no data)\n".to_string(),
    };

    let width = opts.width.max(2);
    let height = opts.height.max(2);
    let cutoffs = thresholds.cutoffs();

    let mut lo = plotted
        .iter()
        .map(|point| point.score)
        .fold(thresholds.t4(), f64::min);
    let mut hi = plotted
        .iter()
        .map(|point| point.score)
        .fold(thresholds.t1(), f64::max);
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 1.0;
        hi += 1.0;
    }
    let row_of = |value: f64| -> usize {
        let scaled = (hi - value) / (hi - lo) * (height - 1) as f64;
        (scaled.round() as usize).min(height - 1)
    };

    let mut grid = vec![vec![' '; width]; height];
    let mut row_cutoffs: Vec<Vec<String>> = vec![Vec::new(); height];
    for cutoff in cutoffs {
        let row = row_of(cutoff);
        grid[row].iter_mut().for_each(|cell| *cell = '-');
        let text = format!("{cutoff:.0}");
        if !row_cutoffs[row].contains(&text) {
            row_cutoffs[row].push(text);
        }
    }
    // Cutoffs sharing a row are joined so none of them disappears.
    let mut labels = row_cutoffs
        .into_iter()
        .map(|texts| texts.join("/"))
        .collect::<Vec<_>>();
    if labels[0].is_empty() {
        labels[0] = format!("{hi:.0}");
    }
    if labels[height - 1].is_empty() {
        labels[height - 1] = format!("{lo:.0}");
    }
    let pad = labels
        .iter()
        .map(|label| label.chars().count())
        .fold(LABEL_WIDTH, usize::max);

    for (column, score) in columns(&plotted, width) {
        grid[row_of(score)][column] = '*';
    }

    let mut output = String::new();
    for (label, row) in labels.iter().zip(&grid) {
        output.push_str(&format!("{label:>pad$} |"));
        output.extend(row.iter());
        output.push('\n');
    }
    output.push_str(&format!("{:>pad$} +{}\n", "", "-".repeat(width)));

    let first_label = first.format("%Y-%m-%d").to_string();
    let last_label = last.format("%Y-%m-%d").to_string();
    let gap = (width + 1).saturating_sub(first_label.len() + last_label.len());
    if first == last {
        output.push_str(&format!("{:>pad$}  {first_label}\n", ""));
    } else {
        output.push_str(&format!(
            "{:>pad$}  {first_label}{}{last_label}\n",
            "",
            " ".repeat(gap.max(1)),
        ));
    }
    output
}

/// Column position and value for each plotted column.
fn columns(points: &[&SeriesPoint], width: usize) -> Vec<(usize, f64)> {
    let n = points.len();
    if n <= width {
        if n == 1 {
            return vec![(0, points[0].score)];
        }
        return points
            .iter()
            .enumerate()
            .map(|(idx, point)| (idx * (width - 1) / (n - 1), point.score))
            .collect();
    }

    (0..width)
        .filter_map(|column| {
            let start = column * n / width;
            let end = ((column + 1) * n / width).max(start + 1);
            let bucket = &points[start..end.min(n)];
            if bucket.is_empty() {
                return None;
            }
            let mean = bucket.iter().map(|point| point.score).sum::<f64>() / bucket.len() as f64;
            Some((column, mean))
        })
        .collect()
}
