//! Batch outlier detector contract.

use crate::errors::DetectionError;
use crate::types::{BatchResult, Observation};

/// A detector that partitions a whole batch into inliers and outliers.
///
/// Implementations compute everything fresh per call and hold no
/// per-batch state, so one instance may serve many callers.
pub trait OutlierDetector {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Score and partition `batch`. Either every observation is returned,
    /// labeled, or the call fails without a partial result.
    fn classify_batch<T: Observation>(
        &self,
        batch: Vec<T>,
    ) -> Result<BatchResult<T>, DetectionError>;
}
