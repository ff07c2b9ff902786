//! The `Observation` trait: anything exposing a metric vector.

/// A record carrying a numeric metric vector.
///
/// Detectors read `metrics()` and otherwise treat the record as an opaque
/// payload that is handed back unchanged. One-dimensional detectors
/// require `metrics().len() == 1`.
pub trait Observation {
    /// The numeric components of this observation.
    fn metrics(&self) -> &[f64];

    /// Number of numeric components.
    fn dimension(&self) -> usize {
        self.metrics().len()
    }

    /// The single component, or `None` when the dimension is not 1.
    fn scalar(&self) -> Option<f64> {
        match self.metrics() {
            [value] => Some(*value),
            _ => None,
        }
    }
}

impl Observation for f64 {
    fn metrics(&self) -> &[f64] {
        std::slice::from_ref(self)
    }
}

impl Observation for [f64] {
    fn metrics(&self) -> &[f64] {
        self
    }
}

impl Observation for Vec<f64> {
    fn metrics(&self) -> &[f64] {
        self
    }
}

impl<T: Observation + ?Sized> Observation for &T {
    fn metrics(&self) -> &[f64] {
        (**self).metrics()
    }
}

impl<T: Observation + ?Sized> Observation for Box<T> {
    fn metrics(&self) -> &[f64] {
        (**self).metrics()
    }
}
