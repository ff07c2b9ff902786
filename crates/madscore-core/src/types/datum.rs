//! `Datum`: the pipeline's concrete observation record.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::observation::Observation;

/// One record flowing through the analysis pipeline.
///
/// `attributes` holds encoded categorical attributes and is never read by
/// the detector. `metrics` is inline for up to 4 components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    pub attributes: Vec<u32>,
    pub metrics: SmallVec<[f64; 4]>,
}

impl Datum {
    pub fn new(attributes: Vec<u32>, metrics: impl IntoIterator<Item = f64>) -> Self {
        Self {
            attributes,
            metrics: metrics.into_iter().collect(),
        }
    }

    /// A datum with a single metric and no attributes.
    pub fn scalar(value: f64) -> Self {
        Self {
            attributes: Vec::new(),
            metrics: smallvec![value],
        }
    }

    /// A datum with a single metric tagged with attributes.
    pub fn with_attributes(attributes: Vec<u32>, value: f64) -> Self {
        Self {
            attributes,
            metrics: smallvec![value],
        }
    }
}

impl Observation for Datum {
    fn metrics(&self) -> &[f64] {
        &self.metrics
    }
}
