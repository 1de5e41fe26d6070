//! Multi-restart annealing loop.
//!
//! # Algorithm
//!
//! For each restart:
//! 1. Draw a random solution (`current`) and score it.
//! 2. For `t = 0 .. iterations`: score a neighbor; accept it if strictly
//!    better, otherwise with probability `exp((current - neighbor) * beta^(-t))`.
//! 3. If the final `current` beats the incumbent, it becomes the incumbent.
//!
//! `t` restarts from 0 with every restart, so each restart runs the full
//! cooling curve.

use super::config::AnnealConfig;
use super::types::SaProblem;
use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Per-restart statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartStats {
    /// Cost of the random starting solution.
    pub initial_cost: f64,

    /// Cost of the accepted solution when the restart ended.
    pub final_cost: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<S: Clone> {
    /// The best solution found across all restarts.
    pub best: S,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Index of the restart that produced `best`.
    pub best_restart: usize,

    /// Statistics of every restart, in restart order.
    pub restarts: Vec<RestartStats>,

    /// Incumbent cost after each restart. Non-increasing.
    pub incumbent_history: Vec<f64>,

    /// Total number of neighbor evaluations.
    pub iterations: usize,
}

/// Executes multi-restart Simulated Annealing.
pub struct SaRunner;

impl SaRunner {
    /// Runs the annealing search.
    ///
    /// Every restart gets its own random stream, derived from
    /// `config.seed`, so a seeded run is reproducible whether restarts
    /// execute sequentially or in parallel.
    #[tracing::instrument(
        level = "debug",
        name = "anneal",
        skip_all,
        fields(restarts = config.restarts, iterations = config.iterations, beta = config.beta)
    )]
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &AnnealConfig,
    ) -> Result<AnnealResult<P::Solution>, ConfigError> {
        config.validate()?;

        let mut master = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        let seeds: Vec<u64> = (0..config.restarts).map(|_| master.random()).collect();

        let outcomes = run_restarts(problem, config, &seeds);

        let mut restarts = Vec::with_capacity(outcomes.len());
        let mut incumbent_history = Vec::with_capacity(outcomes.len());
        let mut outcomes = outcomes.into_iter().enumerate();

        let Some((_, (mut best, first))) = outcomes.next() else {
            return Err(ConfigError::NoRestarts);
        };
        let mut best_cost = first.final_cost;
        let mut best_restart = 0;
        restarts.push(first);
        incumbent_history.push(best_cost);
        tracing::info!(restart = 0, cost = best_cost, "new incumbent");

        for (restart, (solution, stats)) in outcomes {
            if stats.final_cost < best_cost {
                best = solution;
                best_cost = stats.final_cost;
                best_restart = restart;
                tracing::info!(restart, cost = best_cost, "new incumbent");
            }
            restarts.push(stats);
            incumbent_history.push(best_cost);
        }

        let iterations = config.restarts * config.iterations;
        tracing::info!(best_cost, best_restart, iterations, "annealing finished");

        Ok(AnnealResult {
            best,
            best_cost,
            best_restart,
            restarts,
            incumbent_history,
            iterations,
        })
    }
}

/// Probability of accepting a move that changes the cost by `delta` at
/// iteration `t`.
///
/// Returns 1 for non-worsening moves. For worsening moves the result is
/// `exp(-delta * beta^(-t))`, which lies in `[0, 1)` and decreases with
/// `t` for `0 < beta < 1`. Once `beta^(-t)` overflows the result is 0.
pub fn acceptance_probability(delta: f64, beta: f64, t: usize) -> f64 {
    if delta <= 0.0 {
        return 1.0;
    }
    let scale = beta.powf(-(t as f64));
    (-delta * scale).exp()
}

fn run_restarts<P: SaProblem>(
    problem: &P,
    config: &AnnealConfig,
    seeds: &[u64],
) -> Vec<(P::Solution, RestartStats)> {
    #[cfg(feature = "parallel")]
    if config.parallel {
        return seeds
            .par_iter()
            .enumerate()
            .map(|(restart, &seed)| anneal(problem, config, restart, seed))
            .collect();
    }

    seeds
        .iter()
        .enumerate()
        .map(|(restart, &seed)| anneal(problem, config, restart, seed))
        .collect()
}

/// One restart: INIT, then `config.iterations` Metropolis steps.
fn anneal<P: SaProblem>(
    problem: &P,
    config: &AnnealConfig,
    restart: usize,
    seed: u64,
) -> (P::Solution, RestartStats) {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut current = problem.initial_solution(&mut rng);
    let mut current_cost = problem.cost(&current);
    let initial_cost = current_cost;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;

    for t in 0..config.iterations {
        let neighbor = problem.neighbor(&current, &mut rng);
        let neighbor_cost = problem.cost(&neighbor);

        let accept = if neighbor_cost < current_cost {
            improving_moves += 1;
            true
        } else {
            let probability = acceptance_probability(neighbor_cost - current_cost, config.beta, t);
            rng.random_range(0.0..1.0) < probability
        };

        if accept {
            current = neighbor;
            current_cost = neighbor_cost;
            accepted_moves += 1;
        }
    }

    tracing::debug!(
        restart,
        initial_cost,
        final_cost = current_cost,
        accepted_moves,
        improving_moves,
        "restart finished"
    );

    (
        current,
        RestartStats {
            initial_cost,
            final_cost: current_cost,
            accepted_moves,
            improving_moves,
        },
    )
}
