//! Top-level madscore configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DetectorConfig, ThresholdMode};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`MADSCORE_*`)
/// 3. Project config (`madscore.toml` in project root)
/// 4. User config (`~/.madscore/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MadscoreConfig {
    pub detector: DetectorConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub detector_threshold: Option<f64>,
    pub detector_mode: Option<ThresholdMode>,
}

impl MadscoreConfig {
    /// Load configuration with layered resolution, reading the user config
    /// from `~/.madscore/config.toml`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let user_config_path = Self::user_config_path();
        Self::load_from(root, user_config_path.as_deref(), cli_overrides)
    }

    /// Load configuration with an explicit user config path.
    pub fn load_from(
        root: &Path,
        user_config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = user_config_path {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(
            mode = %config.detector.effective_mode(),
            threshold = config.detector.effective_threshold(),
            "resolved madscore config"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &MadscoreConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.detector.threshold {
            if !threshold.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "detector.threshold".to_string(),
                    message: "must be a finite number".to_string(),
                });
            }
            match config.detector.effective_mode() {
                ThresholdMode::RobustZScore if threshold <= 0.0 => {
                    return Err(ConfigError::ValidationFailed {
                        field: "detector.threshold".to_string(),
                        message: "robust z-score cutoff must be greater than 0".to_string(),
                    });
                }
                ThresholdMode::Percentile if !(0.0..=1.0).contains(&threshold) => {
                    return Err(ConfigError::ValidationFailed {
                        field: "detector.threshold".to_string(),
                        message: "percentile fraction must be between 0.0 and 1.0".to_string(),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.madscore/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut MadscoreConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MadscoreConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut MadscoreConfig, other: &MadscoreConfig) {
        if other.detector.threshold.is_some() {
            base.detector.threshold = other.detector.threshold;
        }
        if other.detector.mode.is_some() {
            base.detector.mode = other.detector.mode;
        }
    }

    /// Apply environment overrides through `lookup`.
    /// Pattern: `MADSCORE_DETECTOR_THRESHOLD`, `MADSCORE_DETECTOR_MODE`.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut MadscoreConfig, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("MADSCORE_DETECTOR_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.detector.threshold = Some(v);
            }
        }
        if let Some(val) = lookup("MADSCORE_DETECTOR_MODE") {
            if let Ok(v) = val.parse::<ThresholdMode>() {
                config.detector.mode = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut MadscoreConfig, cli: &CliOverrides) {
        if let Some(v) = cli.detector_threshold {
            config.detector.threshold = Some(v);
        }
        if let Some(v) = cli.detector_mode {
            config.detector.mode = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ThresholdPolicy;

    #[test]
    fn test_from_toml() {
        let config = MadscoreConfig::from_toml(
            r#"
            [detector]
            threshold = 0.05
            mode = "percentile"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.detector.policy(),
            ThresholdPolicy::PercentileCutoff { fraction: 0.05 }
        );
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = MadscoreConfig::from_toml("").unwrap();
        assert_eq!(config.detector.policy(), ThresholdPolicy::default());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = MadscoreConfig::from_toml(
            r#"
            [detector]
            threshold = 2.5
            window = 10

            [reporting]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.detector.effective_threshold(), 2.5);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let err = MadscoreConfig::from_toml("[detector]\nthreshold = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }));

        let err = MadscoreConfig::from_toml("[detector]\nthreshold = 1.5\nmode = \"percentile\"")
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }));

        let err = MadscoreConfig::from_toml("[detector]\nthreshold = nan").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = MadscoreConfig::from_toml("[detector\nthreshold = 1").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_layer_precedence() {
        let user = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();
        let user_path = user.path().join("config.toml");
        std::fs::write(&user_path, "[detector]\nthreshold = 0.1\nmode = \"percentile\"\n").unwrap();
        std::fs::write(project.path().join("madscore.toml"), "[detector]\nthreshold = 0.2\n")
            .unwrap();

        // Project overrides user threshold, user mode survives.
        let config = MadscoreConfig::load_from(project.path(), Some(&user_path), None).unwrap();
        assert_eq!(
            config.detector.policy(),
            ThresholdPolicy::PercentileCutoff { fraction: 0.2 }
        );

        // CLI beats both.
        let cli = CliOverrides {
            detector_threshold: Some(4.0),
            detector_mode: Some(ThresholdMode::RobustZScore),
        };
        let config = MadscoreConfig::load_from(project.path(), Some(&user_path), Some(&cli)).unwrap();
        assert_eq!(
            config.detector.policy(),
            ThresholdPolicy::RobustZScore { threshold: 4.0 }
        );
    }

    #[test]
    fn test_invalid_user_toml_is_fatal() {
        let user = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();
        let user_path = user.path().join("config.toml");
        std::fs::write(&user_path, "[detector\n").unwrap();
        let err = MadscoreConfig::load_from(project.path(), Some(&user_path), None).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_missing_files_yield_defaults() {
        let project = tempfile::tempdir().unwrap();
        let config = MadscoreConfig::load_from(project.path(), None, None).unwrap();
        assert_eq!(config.detector.effective_mode(), ThresholdMode::RobustZScore);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = MadscoreConfig::default();
        MadscoreConfig::apply_env_overrides(&mut config, |key| match key {
            "MADSCORE_DETECTOR_THRESHOLD" => Some("0.02".to_string()),
            "MADSCORE_DETECTOR_MODE" => Some("percentile".to_string()),
            _ => None,
        });
        assert_eq!(
            config.detector.policy(),
            ThresholdPolicy::PercentileCutoff { fraction: 0.02 }
        );

        let mut config = MadscoreConfig::default();
        MadscoreConfig::apply_env_overrides(&mut config, |key| match key {
            "MADSCORE_DETECTOR_THRESHOLD" => Some("not-a-number".to_string()),
            _ => None,
        });
        assert!(config.detector.threshold.is_none());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = MadscoreConfig::from_toml("[detector]\nthreshold = 3.5\n").unwrap();
        let text = config.to_toml().unwrap();
        let back = MadscoreConfig::from_toml(&text).unwrap();
        assert_eq!(back.detector.threshold, Some(3.5));
    }
}
