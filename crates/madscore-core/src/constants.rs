//! Numeric and naming constants shared across the workspace.

/// Rescales MAD so it estimates the standard deviation of normally
/// distributed data: `1 / Φ⁻¹(3/4)`.
pub const MAD_TO_ZSCORE_COEFFICIENT: f64 = 1.4826;

/// Default robust z-score cutoff.
pub const DEFAULT_ROBUST_Z_THRESHOLD: f64 = 3.0;

/// Default fraction of a batch flagged in percentile mode (top 1%).
pub const DEFAULT_PERCENTILE_FRACTION: f64 = 0.01;

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "MADSCORE_LOG";

/// Fallback tracing filter when `MADSCORE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "madscore=info";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "madscore.toml";

/// User-level config directory name under the home directory.
pub const USER_CONFIG_DIR: &str = ".madscore";
