//! Outlier Detection — Median Absolute Deviation.
//!
//! Two passes over a sorted copy of the batch:
//! - median of the values
//! - median of the absolute residuals (MAD)
//!
//! Scores are robust z-scores `|x - median| / (1.4826 * MAD)`, then split by
//! a [`ThresholdPolicy`](madscore_core::ThresholdPolicy).

pub mod mad;
pub mod median;
pub mod partition;
pub mod score;

pub use mad::MadDetector;
pub use median::{mad_stats, median};
pub use score::robust_z_score;
