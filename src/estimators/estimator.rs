/// Online scalar estimator (e.g., streaming mean).
///
/// Implementations accept values incrementally via [`add`](Estimator::add)
/// and expose the current estimate via [`estimation`](Estimator::estimation).
pub trait Estimator {
    /// Incorporates a new observation.
    fn add(&mut self, v: f64);

    /// Returns the current estimate.
    fn estimation(&self) -> f64;

    /// Returns the number of observations incorporated so far.
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
