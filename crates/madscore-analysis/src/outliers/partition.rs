//! Turning scores into inlier/outlier labels.

use madscore_core::{ScoredObservation, ThresholdPolicy};

/// Outlier test for robust z-score mode. Strict: a score equal to the
/// threshold is an inlier.
pub fn exceeds_threshold(score: f64, threshold: f64) -> bool {
    score > threshold
}

/// Number of lowest-score observations kept as inliers when the top
/// `fraction` of `n` is flagged: `floor(n - n * fraction)`, clamped to
/// `[0, n]`. A NaN fraction flags nothing.
pub fn percentile_split_point(n: usize, fraction: f64) -> usize {
    let n_f = n as f64;
    let raw = (n_f - n_f * fraction).floor();
    if raw.is_nan() {
        return n;
    }
    raw.clamp(0.0, n_f) as usize
}

/// Split scored observations into `(inliers, outliers)`.
///
/// `RobustZScore` keeps the incoming order in both halves.
/// `PercentileCutoff` orders both halves by ascending score; equal scores
/// keep their incoming order.
pub fn split<T>(
    scored: Vec<ScoredObservation<T>>,
    policy: ThresholdPolicy,
) -> (Vec<ScoredObservation<T>>, Vec<ScoredObservation<T>>) {
    match policy {
        ThresholdPolicy::RobustZScore { threshold } => scored
            .into_iter()
            .partition(|s| !exceeds_threshold(s.score, threshold)),
        ThresholdPolicy::PercentileCutoff { fraction } => {
            let mut inliers = scored;
            inliers.sort_by(|a, b| a.score.total_cmp(&b.score));
            let split_point = percentile_split_point(inliers.len(), fraction);
            let outliers = inliers.split_off(split_point);
            (inliers, outliers)
        }
    }
}
