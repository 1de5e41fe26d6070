//! Core trait for the annealing driver.

use rand::Rng;

/// A problem the annealing driver can search.
///
/// The implementor supplies random starting points, a cost and a
/// neighbor move; the driver owns restarts, acceptance and cooling.
/// Lower cost is better.
///
/// # Examples
///
/// ```ignore
/// struct Shop { instance: Instance }
///
/// impl SaProblem for Shop {
///     type Solution = OperationSequence;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> OperationSequence {
///         OperationSequence::random(&self.instance, rng)
///     }
///
///     fn cost(&self, seq: &OperationSequence) -> f64 {
///         makespan(&self.instance, seq.as_slice()) as f64
///     }
///
///     fn neighbor<R: Rng>(&self, seq: &OperationSequence, rng: &mut R) -> OperationSequence {
///         swap_neighbor(seq, rng)
///     }
/// }
/// ```
pub trait SaProblem: Send + Sync {
    /// The solution representation.
    type Solution: Clone + Send;

    /// Draws a random starting solution for one restart.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Cost of a solution. Must be a pure function of `solution`.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Produces a perturbed copy of `solution`.
    ///
    /// The driver only ever compares the returned value, so
    /// implementations are free to build it however they like.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
