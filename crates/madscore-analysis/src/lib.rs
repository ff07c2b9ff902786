//! # madscore-analysis
//!
//! Batch outlier detection with the Median Absolute Deviation.
//! Scores every observation by its robust z-score and partitions the
//! batch with either a z-score cutoff or a top-fraction cutoff.

pub mod outliers;

pub use outliers::MadDetector;
