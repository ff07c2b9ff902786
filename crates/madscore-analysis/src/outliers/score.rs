//! Robust z-score with an explicit zero-spread policy.

use madscore_core::constants::MAD_TO_ZSCORE_COEFFICIENT;

/// Robust z-score of a point whose absolute residual from the median is
/// `residual`, given the batch MAD.
///
/// Zero spread (`mad == 0`): a point on the median scores `0.0`, any other
/// point scores `f64::INFINITY`. The result is never NaN for finite input.
pub fn robust_z_score(residual: f64, mad: f64) -> f64 {
    if mad > 0.0 {
        residual / (mad * MAD_TO_ZSCORE_COEFFICIENT)
    } else if residual == 0.0 {
        0.0
    } else {
        f64::INFINITY
    }
}
