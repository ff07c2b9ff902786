//! Trait seams for detectors.

pub mod outlier_detector;

pub use outlier_detector::OutlierDetector;
