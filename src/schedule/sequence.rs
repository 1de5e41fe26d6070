//! Operation-sequence encoding.
//!
//! A candidate schedule is a flat list of job ids of length N × M in which
//! every job appears exactly M times. Read left to right, the k-th
//! occurrence of job `j` dispatches `j`'s k-th operation. Every permutation
//! of the multiset is a valid schedule.
//!
//! # Reference
//! Bierwirth (1995), "A generalized permutation approach to JSSP"

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::InstanceError;
use crate::instance::Instance;

/// Permutation-with-repetition encoding of a job-shop schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OperationSequence(Vec<usize>);

impl OperationSequence {
    /// Job-major sequence: all of job 0's operations, then job 1's, and so on.
    pub fn ordered(instance: &Instance) -> Self {
        let m = instance.num_machines();
        Self(
            (0..instance.num_jobs())
                .flat_map(|job| std::iter::repeat_n(job, m))
                .collect(),
        )
    }

    /// Uniformly random permutation of the job multiset.
    pub fn random<R: Rng>(instance: &Instance, rng: &mut R) -> Self {
        let mut seq = Self::ordered(instance);
        seq.0.shuffle(rng);
        seq
    }

    /// Wraps an explicit list of job ids, checking it against `instance`.
    pub fn from_jobs(instance: &Instance, jobs: Vec<usize>) -> Result<Self, InstanceError> {
        check_multiset(instance, &jobs)?;
        Ok(Self(jobs))
    }

    /// Whether this sequence holds every job of `instance` exactly M times.
    pub fn is_valid_for(&self, instance: &Instance) -> bool {
        check_multiset(instance, &self.0).is_ok()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Mutable access for the neighbor operators, which only permute.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.0
    }
}

impl AsRef<[usize]> for OperationSequence {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

fn check_multiset(instance: &Instance, jobs: &[usize]) -> Result<(), InstanceError> {
    let expected = instance.operation_count();
    if jobs.len() != expected {
        return Err(InstanceError::InvalidSequence(format!(
            "length {} != {expected}",
            jobs.len()
        )));
    }

    let m = instance.num_machines();
    let mut counts = vec![0usize; instance.num_jobs()];
    for &job in jobs {
        let count = counts.get_mut(job).ok_or_else(|| {
            InstanceError::InvalidSequence(format!("unknown job id {job}"))
        })?;
        *count += 1;
    }
    if let Some((job, &count)) = counts.iter().enumerate().find(|&(_, &c)| c != m) {
        return Err(InstanceError::InvalidSequence(format!(
            "job {job} appears {count} times, expected {m}"
        )));
    }
    Ok(())
}
