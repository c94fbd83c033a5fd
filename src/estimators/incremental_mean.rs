use crate::estimators::Estimator;

/// Streaming mean estimator: `mean += (v - mean) / len`.
///
/// The incremental form keeps no running sum, so the estimate stays accurate
/// over arbitrarily long sessions. An empty estimator reports `0.0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IncrementalMean {
    mean: f64,
    len: u64,
}

impl IncrementalMean {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Estimator for IncrementalMean {
    #[inline]
    fn add(&mut self, v: f64) {
        self.len += 1;
        self.mean += (v - self.mean) / self.len as f64;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        self.mean
    }

    #[inline]
    fn len(&self) -> u64 {
        self.len
    }
}
