//! Job-shop makespan minimization on top of the annealing driver.
//!
//! [`JobShopProblem`] adapts an [`Instance`] to [`SaProblem`]:
//! random multiset permutations as starting points, the list-scheduling
//! makespan as cost, and the swap move as neighbor. [`solve`] runs the
//! driver and hands back the best sequence with its makespan.

use rand::Rng;

use crate::error::ConfigError;
use crate::instance::Instance;
use crate::sa::{AnnealConfig, RestartStats, SaProblem, SaRunner};
use crate::schedule::{self, OperationSequence, ScheduledOperation};

/// Annealing problem over the operation sequences of one instance.
#[derive(Debug, Clone, Copy)]
pub struct JobShopProblem<'a> {
    instance: &'a Instance,
}

impl<'a> JobShopProblem<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }
}

impl SaProblem for JobShopProblem<'_> {
    type Solution = OperationSequence;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> OperationSequence {
        OperationSequence::random(self.instance, rng)
    }

    fn cost(&self, sequence: &OperationSequence) -> f64 {
        schedule::makespan(self.instance, sequence.as_slice()) as f64
    }

    fn neighbor<R: Rng>(&self, sequence: &OperationSequence, rng: &mut R) -> OperationSequence {
        schedule::swap_neighbor(sequence, rng)
    }
}

/// Best schedule found by [`solve`].
#[derive(Debug, Clone)]
pub struct Solution {
    /// Best operation sequence.
    pub sequence: OperationSequence,

    /// Makespan of `sequence`.
    pub makespan: u64,

    /// Statistics of every restart, in restart order.
    pub restarts: Vec<RestartStats>,
}

impl Solution {
    /// Start and finish time of every operation of the best schedule.
    pub fn timetable(&self, instance: &Instance) -> Vec<ScheduledOperation> {
        schedule::timetable(instance, self.sequence.as_slice())
    }
}

/// Minimizes the makespan of `instance` with multi-restart annealing.
///
/// # Examples
///
/// ```
/// use u_jobshop::instance::{ft06, FT06_OPTIMUM};
/// use u_jobshop::problem::solve;
/// use u_jobshop::sa::AnnealConfig;
///
/// let instance = ft06();
/// let config = AnnealConfig::default().with_restarts(5).with_seed(1);
/// let solution = solve(&instance, &config).unwrap();
/// assert!(solution.makespan >= FT06_OPTIMUM);
/// ```
pub fn solve(instance: &Instance, config: &AnnealConfig) -> Result<Solution, ConfigError> {
    let result = SaRunner::run(&JobShopProblem::new(instance), config)?;
    let makespan = schedule::makespan(instance, result.best.as_slice());
    Ok(Solution {
        sequence: result.best,
        makespan,
        restarts: result.restarts,
    })
}
