//! Median and MAD over sorted data.

use madscore_core::MadStats;

/// Sort ascending with IEEE total ordering.
pub fn sort_ascending(values: &mut [f64]) {
    values.sort_by(f64::total_cmp);
}

/// Median of an ascending slice.
///
/// Even length: mean of the elements at `n/2 - 1` and `n/2`.
/// Odd length: the element at `n/2`.
/// Returns `None` for an empty slice.
pub fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 0 {
        // Halve before adding so values near f64::MAX do not overflow.
        Some(sorted[mid - 1] / 2.0 + sorted[mid] / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Median of arbitrary-order values. Does not modify `values`.
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sort_ascending(&mut sorted);
    median_of_sorted(&sorted)
}

/// Median and MAD of an ascending slice.
pub fn mad_stats_of_sorted(sorted: &[f64]) -> Option<MadStats> {
    let median = median_of_sorted(sorted)?;
    let mut residuals: Vec<f64> = sorted.iter().map(|v| (v - median).abs()).collect();
    sort_ascending(&mut residuals);
    let mad = median_of_sorted(&residuals)?;
    Some(MadStats { median, mad })
}

/// Median and MAD of arbitrary-order values. Does not modify `values`.
pub fn mad_stats(values: &[f64]) -> Option<MadStats> {
    let mut sorted = values.to_vec();
    sort_ascending(&mut sorted);
    mad_stats_of_sorted(&sorted)
}
