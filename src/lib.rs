//! Job-shop scheduling by multi-restart simulated annealing.
//!
//! Minimizes the makespan of an N-job × M-machine job-shop instance in
//! which every job visits every machine once, in a job-specific order.
//!
//! # Modules
//!
//! - **`instance`**: Validated, immutable problem data (routes and
//!   processing times), plus the ft06 benchmark.
//! - **`schedule`**: Operation-sequence encoding, list-scheduling decoder,
//!   makespan evaluator and swap neighborhood.
//! - **`sa`**: Generic multi-restart Simulated Annealing driver.
//! - **`problem`**: Glue between the two; [`problem::solve`] is the entry
//!   point most callers want.
//!
//! # Features
//!
//! - `parallel`: run restarts concurrently with rayon.
//! - `serde`: `Serialize`/`Deserialize` for instances, sequences and configs.
//!
//! # Example
//!
//! ```
//! use u_jobshop::instance::Instance;
//! use u_jobshop::problem::solve;
//! use u_jobshop::sa::AnnealConfig;
//!
//! let instance = Instance::new(
//!     vec![vec![0, 1], vec![1, 0]],
//!     vec![vec![3, 2], vec![2, 4]],
//! )?;
//! let solution = solve(&instance, &AnnealConfig::default().with_seed(7))?;
//! assert_eq!(solution.makespan, 7);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod instance;
pub mod problem;
pub mod sa;
pub mod schedule;

pub use error::{ConfigError, InstanceError};
