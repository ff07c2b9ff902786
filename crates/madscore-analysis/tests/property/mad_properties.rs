use madscore_analysis::outliers::partition::percentile_split_point;
use madscore_analysis::outliers::{mad_stats, median};
use madscore_analysis::MadDetector;
use madscore_core::constants::MAD_TO_ZSCORE_COEFFICIENT;
use proptest::prelude::*;
use statrs::distribution::{ContinuousCDF, Normal};
use statrs::statistics::{Data, Median};

fn arb_batch() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..200)
}

/// statrs interpolates the median, so allow error proportional to the
/// magnitude of the data rather than of the result.
fn close(a: f64, b: f64, values: &[f64]) -> bool {
    let scale = values.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    (a - b).abs() <= 1e-9 * (1.0 + scale)
}

#[test]
fn consistency_constant_matches_normal_quantile() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    let exact = 1.0 / normal.inverse_cdf(0.75);
    assert!((exact - MAD_TO_ZSCORE_COEFFICIENT).abs() < 1e-4, "1/Φ⁻¹(0.75) = {exact}");
}

// ── Statistics agree with statrs ─────────────────────────────────────────

proptest! {
    #[test]
    fn median_matches_statrs(values in arb_batch()) {
        let ours = median(&values).unwrap();
        let reference = Data::new(values.clone()).median();
        prop_assert!(close(ours, reference, &values), "ours {} vs statrs {}", ours, reference);
    }

    #[test]
    fn mad_matches_statrs(values in arb_batch()) {
        let stats = mad_stats(&values).unwrap();
        let residuals: Vec<f64> = values.iter().map(|v| (v - stats.median).abs()).collect();
        let reference = Data::new(residuals.clone()).median();
        prop_assert!(close(stats.mad, reference, &residuals), "ours {} vs statrs {}", stats.mad, reference);
        prop_assert!(stats.mad >= 0.0);
    }
}

// ── Completeness and labeling ────────────────────────────────────────────

proptest! {
    #[test]
    fn zscore_mode_partitions_by_strict_cutoff(
        values in arb_batch(),
        threshold in 0.5f64..6.0,
    ) {
        let n = values.len();
        let result = MadDetector::robust_z_score(threshold).classify_batch(values.clone()).unwrap();
        prop_assert_eq!(result.len(), n);

        for s in &result.inliers {
            prop_assert!(s.score <= threshold);
        }
        for s in &result.outliers {
            prop_assert!(s.score > threshold);
        }

        let mut returned: Vec<f64> = result.iter().map(|s| s.observation).collect();
        let mut expected = values;
        returned.sort_by(f64::total_cmp);
        expected.sort_by(f64::total_cmp);
        prop_assert_eq!(returned, expected);
    }

    #[test]
    fn percentile_mode_flags_expected_count(
        values in arb_batch(),
        fraction in 0.0f64..=1.0,
    ) {
        let n = values.len();
        let result = MadDetector::percentile(fraction).classify_batch(values).unwrap();
        prop_assert_eq!(result.len(), n);
        prop_assert_eq!(result.inliers.len(), percentile_split_point(n, fraction));

        // Every outlier scores at least as high as every inlier.
        let max_inlier = result.inliers.iter().map(|s| s.score).fold(f64::NEG_INFINITY, f64::max);
        for s in &result.outliers {
            prop_assert!(s.score >= max_inlier);
        }
    }

    #[test]
    fn scores_are_never_nan(values in arb_batch(), repeat in 1usize..5) {
        // Repeating values pushes many batches into the zero-MAD case.
        let batch: Vec<f64> = values.iter().flat_map(|&v| std::iter::repeat(v).take(repeat)).collect();
        let result = MadDetector::default().classify_batch(batch).unwrap();
        for s in result.iter() {
            prop_assert!(!s.score.is_nan());
            prop_assert!(s.score >= 0.0);
        }
    }

    #[test]
    fn classification_is_deterministic(values in arb_batch()) {
        let detector = MadDetector::robust_z_score(2.5);
        let first = detector.classify_batch(values.clone()).unwrap();
        let second = detector.classify_batch(values).unwrap();
        prop_assert_eq!(first, second);
    }
}
