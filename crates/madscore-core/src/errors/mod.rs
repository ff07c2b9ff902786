//! Error handling for madscore.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod detection_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use detection_error::DetectionError;
pub use error_code::MadErrorCode;
