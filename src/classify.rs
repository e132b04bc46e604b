use crate::types::judgment::Judgment;
use crate::types::thresholds::ThresholdSet;

/// Maps a score to its band, checking from the top band down.
///
/// Every cut-off is inclusive on its lower bound: a score equal to `t2` is
/// `MildBullish`, not `Neutral`. Scores are not range-checked. NaN fails
/// every comparison and lands in `StrongBearish`.
pub fn classify(score: f64, thresholds: &ThresholdSet) -> Judgment {
    if score >= thresholds.t1() {
        Judgment::StrongBullish
    } else if score >= thresholds.t2() {
        Judgment::MildBullish
    } else if score >= thresholds.t3() {
        Judgment::Neutral
    } else if score >= thresholds.t4() {
        Judgment::MildBearish
    } else {
        Judgment::StrongBearish
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdClassifier {
    thresholds: ThresholdSet,
}

impl ThresholdClassifier {
    pub fn new(thresholds: ThresholdSet) -> Self {
        Self { thresholds }
    }

    pub fn classify(&self, score: f64) -> Judgment {
        classify(score, &self.thresholds)
    }

    pub fn thresholds(&self) -> &ThresholdSet {
        &self.thresholds
    }

    /// Human-readable score interval for each band, top band first.
    pub fn bands(&self) -> [(Judgment, String); 5] {
        let [t1, t2, t3, t4] = self.thresholds.cutoffs();
        [
            (Judgment::StrongBullish, format!("score >= {t1}")),
            (Judgment::MildBullish, format!("{t2} <= score < {t1}")),
            (Judgment::Neutral, format!("{t3} <= score < {t2}")),
            (Judgment::MildBearish, format!("{t4} <= score < {t3}")),
            (Judgment::StrongBearish, format!("score < {t4}")),
        ]
    }
}
