//! MadErrorCode trait for host-facing error reporting.

/// Trait for mapping madscore errors to stable error code strings.
/// Every error enum implements this so a host pipeline can branch on
/// the code instead of parsing messages.
pub trait MadErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
