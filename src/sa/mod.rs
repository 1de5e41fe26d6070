//! Simulated Annealing (SA) with independent restarts.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with a probability
//! that shrinks as the iteration count grows, so each restart explores
//! early and exploits late. The incumbent is kept across restarts.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - van Laarhoven, Aarts & Lenstra (1992), "Job Shop Scheduling by
//!   Simulated Annealing"

mod config;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use runner::{acceptance_probability, AnnealResult, RestartStats, SaRunner};
pub use types::SaProblem;
