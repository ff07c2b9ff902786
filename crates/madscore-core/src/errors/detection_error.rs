//! Detection errors.

use super::error_code::{self, MadErrorCode};

/// Errors raised when a batch cannot be classified.
///
/// Every variant is an invalid-input condition: the batch is rejected
/// as a whole and no partial result is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetectionError {
    #[error("Invalid input: batch is empty, median is undefined")]
    EmptyBatch,

    #[error("Invalid input: observation {index} has {dimension} metrics, expected exactly 1")]
    InvalidDimension { index: usize, dimension: usize },

    #[error("Invalid input: observation {index} has non-finite value {value}")]
    NonFiniteValue { index: usize, value: f64 },
}

impl DetectionError {
    /// Index of the offending observation, if the error names one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::EmptyBatch => None,
            Self::InvalidDimension { index, .. } | Self::NonFiniteValue { index, .. } => {
                Some(*index)
            }
        }
    }
}

impl MadErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
