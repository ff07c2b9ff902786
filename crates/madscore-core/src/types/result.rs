//! Result types for a classified batch.

use serde::{Deserialize, Serialize};

use crate::constants::MAD_TO_ZSCORE_COEFFICIENT;

/// An observation paired with its outlier score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredObservation<T> {
    /// The caller's observation, passed through unchanged.
    pub observation: T,
    /// Robust z-score magnitude, always ≥ 0. `+∞` when the batch has
    /// zero spread and this point differs from the median.
    pub score: f64,
}

impl<T> ScoredObservation<T> {
    pub fn new(observation: T, score: f64) -> Self {
        Self { observation, score }
    }

    pub fn into_observation(self) -> T {
        self.observation
    }

    /// Transform the payload while keeping the score.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ScoredObservation<U> {
        ScoredObservation {
            observation: f(self.observation),
            score: self.score,
        }
    }
}

/// Location and spread computed for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MadStats {
    pub median: f64,
    /// Median absolute deviation from `median`.
    pub mad: f64,
}

impl MadStats {
    /// MAD rescaled to a standard-deviation estimate.
    pub fn scale(&self) -> f64 {
        self.mad * MAD_TO_ZSCORE_COEFFICIENT
    }

    /// True when at least half the batch sits exactly on the median.
    pub fn is_degenerate(&self) -> bool {
        self.mad == 0.0
    }
}

/// A batch partitioned into inliers and outliers.
///
/// Every input observation lands in exactly one of the two sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult<T> {
    pub inliers: Vec<ScoredObservation<T>>,
    pub outliers: Vec<ScoredObservation<T>>,
    /// The statistics the scores were computed from.
    pub stats: MadStats,
}

impl<T> BatchResult<T> {
    /// Total number of classified observations.
    pub fn len(&self) -> usize {
        self.inliers.len() + self.outliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Share of the batch flagged as outliers, in [0.0, 1.0].
    pub fn outlier_fraction(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.outliers.len() as f64 / self.len() as f64
    }

    /// All scored observations, inliers first.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredObservation<T>> {
        self.inliers.iter().chain(self.outliers.iter())
    }

    /// Transform every payload, keeping scores, partition and stats.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> BatchResult<U> {
        BatchResult {
            inliers: self.inliers.into_iter().map(|s| s.map(&mut f)).collect(),
            outliers: self.outliers.into_iter().map(|s| s.map(&mut f)).collect(),
            stats: self.stats,
        }
    }
}

impl<T: Clone> BatchResult<&T> {
    /// Detach a borrowed result from the caller's slice.
    pub fn cloned(self) -> BatchResult<T> {
        self.map(T::clone)
    }
}
