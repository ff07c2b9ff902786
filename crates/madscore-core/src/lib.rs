//! # madscore-core
//!
//! Foundation crate for the madscore outlier detector.
//! Defines the observation model, result types, threshold policy,
//! detector trait, errors, config, tracing setup, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{DetectorConfig, MadscoreConfig, ThresholdMode};
pub use errors::{ConfigError, DetectionError, MadErrorCode};
pub use traits::OutlierDetector;
pub use types::{BatchResult, Datum, MadStats, Observation, ScoredObservation, ThresholdPolicy};
