//! Error types.
//!
//! Only two things can go wrong: a malformed problem instance (or an
//! operation sequence that does not fit it), and an invalid annealing
//! configuration. Both are detected up front; the search itself has no
//! failure path.

use thiserror::Error;

/// A malformed job-shop instance or operation sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// The instance has no jobs, or its jobs have no operations.
    #[error("instance must have at least one job with at least one operation")]
    Empty,

    /// The route table and the duration table disagree in shape.
    #[error("route table is {routes_rows}x{routes_cols} but duration table is {durations_rows}x{durations_cols} (first mismatch at job {job})")]
    DimensionMismatch {
        job: usize,
        routes_rows: usize,
        routes_cols: usize,
        durations_rows: usize,
        durations_cols: usize,
    },

    /// A job has a different number of operations than job 0.
    #[error("job {job} has {found} operations, expected {expected}")]
    RaggedRow {
        job: usize,
        expected: usize,
        found: usize,
    },

    /// A route references a machine outside `0..machines`.
    #[error("job {job} operation {operation} uses machine {machine}, but only {machines} machines exist")]
    MachineOutOfRange {
        job: usize,
        operation: usize,
        machine: usize,
        machines: usize,
    },

    /// A route visits some machine twice.
    #[error("route of job {job} is not a permutation of the machines (machine {machine} repeated)")]
    NotAPermutation { job: usize, machine: usize },

    /// An operation sequence does not contain every job exactly once per operation.
    #[error("operation sequence is invalid: {0}")]
    InvalidSequence(String),
}

/// An invalid annealing configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("restarts must be positive")]
    NoRestarts,

    #[error("beta must be in (0, 1), got {0}")]
    BetaOutOfRange(f64),
}
