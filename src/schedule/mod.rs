//! Schedule encoding, decoding and neighborhood.
//!
//! # Encoding
//!
//! - [`OperationSequence`]: permutation with repetition of job ids. The
//!   k-th occurrence of job `j` is `j`'s k-th operation.
//! - [`finish_times`] / [`makespan`] / [`timetable`]: list-scheduling
//!   decode of a sequence.
//! - [`swap_neighbor`]: pairwise swap move.
//!
//! # Reference
//! - Bierwirth (1995), "A generalized permutation approach to JSSP"
//! - Cheng et al. (1996), "A Tutorial Survey of JSSP using GA"

mod decoder;
mod neighbor;
mod sequence;

pub use decoder::{finish_times, makespan, timetable, ScheduledOperation};
pub use neighbor::{swap_in_place, swap_neighbor};
pub use sequence::OperationSequence;
