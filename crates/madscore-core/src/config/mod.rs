//! Configuration system for madscore.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod detector_config;
pub mod madscore_config;

pub use detector_config::{DetectorConfig, ThresholdMode};
pub use madscore_config::{CliOverrides, MadscoreConfig};
