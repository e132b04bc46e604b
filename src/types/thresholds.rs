use crate::error::{ReportError, Result};
use serde::Serialize;

pub const DEFAULT_THRESHOLDS: [f64; 4] = [80.0, 60.0, 40.0, 20.0];

/// Four cut-offs `[t1, t2, t3, t4]` splitting the score axis into five bands.
///
/// Construction rejects sets that are not non-increasing, so every band is a
/// well-defined half-open interval. Equal neighbours are allowed and simply
/// leave the band between them empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "Vec<f64>")]
pub struct ThresholdSet {
    cutoffs: [f64; 4],
}

impl ThresholdSet {
    pub fn new(cutoffs: [f64; 4]) -> Result<Self> {
        if let Some(bad) = cutoffs.iter().find(|value| !value.is_finite()) {
            return Err(ReportError::InvalidThresholds(format!(
                "threshold {bad} is not a finite number"
            )));
        }
        for (idx, pair) in cutoffs.windows(2).enumerate() {
            if pair[0] < pair[1] {
                return Err(ReportError::InvalidThresholds(format!(
                    "thresholds must be non-increasing, but t{} = {} is below t{} = {}",
                    idx + 1,
                    pair[0],
                    idx + 2,
                    pair[1]
                )));
            }
        }
        Ok(Self { cutoffs })
    }

    /// Builds a set from raw persisted values, truncating each toward zero
    /// the way the upstream threshold file is read.
    pub fn from_persisted(values: &[f64]) -> Result<Self> {
        let cutoffs: [f64; 4] = values.try_into().map_err(|_| {
            ReportError::InvalidThresholds(format!(
                "expected exactly 4 thresholds, found {}",
                values.len()
            ))
        })?;
        Self::new(cutoffs.map(f64::trunc))
    }

    pub fn cutoffs(&self) -> [f64; 4] {
        self.cutoffs
    }

    pub fn t1(&self) -> f64 {
        self.cutoffs[0]
    }

    pub fn t2(&self) -> f64 {
        self.cutoffs[1]
    }

    pub fn t3(&self) -> f64 {
        self.cutoffs[2]
    }

    pub fn t4(&self) -> f64 {
        self.cutoffs[3]
    }
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            cutoffs: DEFAULT_THRESHOLDS,
        }
    }
}

impl From<ThresholdSet> for Vec<f64> {
    fn from(set: ThresholdSet) -> Self {
        set.cutoffs.to_vec()
    }
}
