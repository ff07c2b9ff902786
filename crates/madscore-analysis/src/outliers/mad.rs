//! Median Absolute Deviation detector (robust z-score or percentile cutoff).
//!
//! Resistant to the outliers it is looking for: median and MAD both have a
//! 50% breakdown point, unlike mean and stddev.

use madscore_core::config::DetectorConfig;
use madscore_core::errors::DetectionError;
use madscore_core::traits::OutlierDetector;
use madscore_core::types::{BatchResult, Observation, ScoredObservation, ThresholdPolicy};

use super::median::mad_stats_of_sorted;
use super::partition;
use super::score::robust_z_score;

/// Batch MAD outlier detector.
///
/// Holds only its immutable policy. Median and MAD are recomputed on every
/// call and returned in [`BatchResult::stats`], so a single detector can be
/// shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MadDetector {
    policy: ThresholdPolicy,
}

impl MadDetector {
    pub fn new(policy: ThresholdPolicy) -> Self {
        Self { policy }
    }

    /// Flag points whose robust z-score is strictly above `threshold`.
    pub fn robust_z_score(threshold: f64) -> Self {
        Self::new(ThresholdPolicy::RobustZScore { threshold })
    }

    /// Flag the top `fraction` of each batch by score.
    pub fn percentile(fraction: f64) -> Self {
        Self::new(ThresholdPolicy::PercentileCutoff { fraction })
    }

    /// Build from a threshold and an "is robust z-score" flag.
    pub fn with_flag(threshold: f64, threshold_is_robust_z_score: bool) -> Self {
        Self::new(ThresholdPolicy::from_flag(
            threshold,
            threshold_is_robust_z_score,
        ))
    }

    pub fn from_config(config: &DetectorConfig) -> Self {
        Self::new(config.policy())
    }

    pub fn policy(&self) -> ThresholdPolicy {
        self.policy
    }

    /// Score and partition an owned batch.
    ///
    /// Fails with an invalid-input error if the batch is empty or any
    /// observation does not carry exactly one finite metric. Nothing is
    /// returned on failure.
    pub fn classify_batch<T: Observation>(
        &self,
        batch: Vec<T>,
    ) -> Result<BatchResult<T>, DetectionError> {
        let span = tracing::debug_span!(
            "mad_classify_batch",
            n = batch.len(),
            policy = %self.policy
        );
        let _guard = span.enter();

        let values = validate(&batch).inspect_err(|e| {
            tracing::debug!(error = %e, "rejecting batch");
        })?;

        // Stable sort on our own pairs; equal values keep input order.
        let mut ranked: Vec<(f64, T)> = values.into_iter().zip(batch).collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        let sorted: Vec<f64> = ranked.iter().map(|(v, _)| *v).collect();
        let stats = mad_stats_of_sorted(&sorted).ok_or(DetectionError::EmptyBatch)?;

        let scored: Vec<ScoredObservation<T>> = ranked
            .into_iter()
            .map(|(value, observation)| {
                let score = robust_z_score((value - stats.median).abs(), stats.mad);
                ScoredObservation::new(observation, score)
            })
            .collect();

        if stats.is_degenerate() {
            let infinite = scored.iter().filter(|s| s.score.is_infinite()).count();
            if infinite > 0 {
                tracing::warn!(
                    median = stats.median,
                    infinite,
                    "MAD is zero; points off the median scored as infinite"
                );
            }
        }

        let (inliers, outliers) = partition::split(scored, self.policy);

        tracing::debug!(
            median = stats.median,
            mad = stats.mad,
            inliers = inliers.len(),
            outliers = outliers.len(),
            "classified batch"
        );

        Ok(BatchResult {
            inliers,
            outliers,
            stats,
        })
    }

    /// Score and partition a borrowed batch. The slice is left untouched;
    /// the result refers back into it.
    pub fn classify_slice<'a, T: Observation>(
        &self,
        batch: &'a [T],
    ) -> Result<BatchResult<&'a T>, DetectionError> {
        self.classify_batch(batch.iter().collect())
    }
}

impl OutlierDetector for MadDetector {
    fn name(&self) -> &'static str {
        "mad"
    }

    fn classify_batch<T: Observation>(
        &self,
        batch: Vec<T>,
    ) -> Result<BatchResult<T>, DetectionError> {
        MadDetector::classify_batch(self, batch)
    }
}

/// Extract the single finite metric of every observation, failing on the
/// first one that has none.
fn validate<T: Observation>(batch: &[T]) -> Result<Vec<f64>, DetectionError> {
    if batch.is_empty() {
        return Err(DetectionError::EmptyBatch);
    }
    batch
        .iter()
        .enumerate()
        .map(|(index, observation)| match observation.metrics() {
            [value] if value.is_finite() => Ok(*value),
            [value] => Err(DetectionError::NonFiniteValue {
                index,
                value: *value,
            }),
            metrics => Err(DetectionError::InvalidDimension {
                index,
                dimension: metrics.len(),
            }),
        })
        .collect()
}
