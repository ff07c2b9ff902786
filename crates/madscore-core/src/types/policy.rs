//! Threshold policy: how scores become inlier/outlier labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ROBUST_Z_THRESHOLD;

/// Classification policy applied after scoring.
///
/// The variant fixes the unit of the cutoff: a robust z-score magnitude,
/// or the fraction of the batch to flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ThresholdPolicy {
    /// Outlier iff `score > threshold` (e.g. 3.0).
    RobustZScore { threshold: f64 },
    /// Flag the top `fraction` of the batch by score (e.g. 0.01 for the top 1%).
    PercentileCutoff { fraction: f64 },
}

impl ThresholdPolicy {
    /// Map a threshold plus "is robust z-score" flag onto a policy.
    pub fn from_flag(threshold: f64, threshold_is_robust_z_score: bool) -> Self {
        if threshold_is_robust_z_score {
            Self::RobustZScore { threshold }
        } else {
            Self::PercentileCutoff {
                fraction: threshold,
            }
        }
    }

    /// The raw cutoff value, in the variant's unit.
    pub fn value(&self) -> f64 {
        match self {
            Self::RobustZScore { threshold } => *threshold,
            Self::PercentileCutoff { fraction } => *fraction,
        }
    }

    pub fn is_robust_z_score(&self) -> bool {
        matches!(self, Self::RobustZScore { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::RobustZScore { .. } => "robust_z_score",
            Self::PercentileCutoff { .. } => "percentile_cutoff",
        }
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::RobustZScore {
            threshold: DEFAULT_ROBUST_Z_THRESHOLD,
        }
    }
}

impl fmt::Display for ThresholdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.value())
    }
}
