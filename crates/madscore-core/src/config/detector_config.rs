//! Detector configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PERCENTILE_FRACTION, DEFAULT_ROBUST_Z_THRESHOLD};
use crate::types::ThresholdPolicy;

/// How `threshold` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdMode {
    /// `threshold` is a robust z-score cutoff.
    #[default]
    RobustZScore,
    /// `threshold` is the fraction of the batch to flag.
    Percentile,
}

impl ThresholdMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RobustZScore => "robust_z_score",
            Self::Percentile => "percentile",
        }
    }
}

impl fmt::Display for ThresholdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThresholdMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "robust_z_score" | "zscore" | "z_score" => Ok(Self::RobustZScore),
            "percentile" | "percentile_cutoff" => Ok(Self::Percentile),
            other => Err(format!("unknown threshold mode '{other}'")),
        }
    }
}

/// Configuration for the MAD detector.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DetectorConfig {
    /// Cutoff, in the unit selected by `mode`. Default: 3.0 for
    /// robust z-score, 0.01 for percentile.
    pub threshold: Option<f64>,
    /// Threshold interpretation. Default: robust z-score.
    pub mode: Option<ThresholdMode>,
}

impl DetectorConfig {
    /// Returns the effective mode, defaulting to robust z-score.
    pub fn effective_mode(&self) -> ThresholdMode {
        self.mode.unwrap_or_default()
    }

    /// Returns the effective threshold for the effective mode.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(match self.effective_mode() {
            ThresholdMode::RobustZScore => DEFAULT_ROBUST_Z_THRESHOLD,
            ThresholdMode::Percentile => DEFAULT_PERCENTILE_FRACTION,
        })
    }

    /// Build the threshold policy this config describes.
    pub fn policy(&self) -> ThresholdPolicy {
        ThresholdPolicy::from_flag(
            self.effective_threshold(),
            self.effective_mode() == ThresholdMode::RobustZScore,
        )
    }
}
