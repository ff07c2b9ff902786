//! Data model: observations in, scored partitions out.

pub mod datum;
pub mod observation;
pub mod policy;
pub mod result;

pub use datum::Datum;
pub use observation::Observation;
pub use policy::ThresholdPolicy;
pub use result::{BatchResult, MadStats, ScoredObservation};
