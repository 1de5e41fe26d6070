//! Job-shop problem instance.
//!
//! An instance is two rectangular tables indexed by `[job][k]`: the machine
//! that performs the job's k-th operation, and that operation's processing
//! time. Every job visits every machine exactly once.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 7

mod ft06;

pub use ft06::{ft06, FT06_OPTIMUM};

use crate::error::InstanceError;

/// An immutable N-job × M-machine job-shop instance.
///
/// # Examples
///
/// ```
/// use u_jobshop::instance::Instance;
///
/// let instance = Instance::new(
///     vec![vec![0, 1], vec![1, 0]],
///     vec![vec![3, 2], vec![2, 4]],
/// ).unwrap();
/// assert_eq!(instance.num_jobs(), 2);
/// assert_eq!(instance.machine_for(1, 0), 1);
/// assert_eq!(instance.duration_of(1, 1), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInstance"))]
pub struct Instance {
    machine_order: Vec<Vec<usize>>,
    durations: Vec<Vec<u64>>,
}

/// Unvalidated form used when deserializing.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInstance {
    machine_order: Vec<Vec<usize>>,
    durations: Vec<Vec<u64>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInstance> for Instance {
    type Error = InstanceError;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        Instance::new(raw.machine_order, raw.durations)
    }
}

impl Instance {
    /// Builds an instance from its route and duration tables.
    ///
    /// `machine_order[j]` must be a permutation of `0..M` and
    /// `durations[j]` must have the same length, for every job `j`.
    pub fn new(
        machine_order: Vec<Vec<usize>>,
        durations: Vec<Vec<u64>>,
    ) -> Result<Self, InstanceError> {
        let machines = machine_order.first().map_or(0, Vec::len);
        if machine_order.is_empty() || machines == 0 {
            return Err(InstanceError::Empty);
        }

        if machine_order.len() != durations.len() {
            return Err(InstanceError::DimensionMismatch {
                job: machine_order.len().min(durations.len()),
                routes_rows: machine_order.len(),
                routes_cols: machines,
                durations_rows: durations.len(),
                durations_cols: durations.first().map_or(0, Vec::len),
            });
        }

        for (job, (route, times)) in machine_order.iter().zip(&durations).enumerate() {
            if route.len() != machines {
                return Err(InstanceError::RaggedRow {
                    job,
                    expected: machines,
                    found: route.len(),
                });
            }
            if times.len() != route.len() {
                return Err(InstanceError::DimensionMismatch {
                    job,
                    routes_rows: machine_order.len(),
                    routes_cols: route.len(),
                    durations_rows: durations.len(),
                    durations_cols: times.len(),
                });
            }

            let mut seen = vec![false; machines];
            for (operation, &machine) in route.iter().enumerate() {
                if machine >= machines {
                    return Err(InstanceError::MachineOutOfRange {
                        job,
                        operation,
                        machine,
                        machines,
                    });
                }
                if seen[machine] {
                    return Err(InstanceError::NotAPermutation { job, machine });
                }
                seen[machine] = true;
            }
        }

        Ok(Self {
            machine_order,
            durations,
        })
    }

    /// Number of jobs (N).
    pub fn num_jobs(&self) -> usize {
        self.machine_order.len()
    }

    /// Number of machines (M), which is also each job's operation count.
    pub fn num_machines(&self) -> usize {
        self.machine_order[0].len()
    }

    /// Total number of operations (N × M), the length of an encoded schedule.
    pub fn operation_count(&self) -> usize {
        self.num_jobs() * self.num_machines()
    }

    /// Machine performing the `k`-th operation of `job`.
    ///
    /// # Panics
    /// Panics if `job` or `k` is out of range.
    #[inline]
    pub fn machine_for(&self, job: usize, k: usize) -> usize {
        self.machine_order[job][k]
    }

    /// Processing time of the `k`-th operation of `job`.
    ///
    /// # Panics
    /// Panics if `job` or `k` is out of range.
    #[inline]
    pub fn duration_of(&self, job: usize, k: usize) -> u64 {
        self.durations[job][k]
    }

    /// The machine visiting order of `job`.
    pub fn job_route(&self, job: usize) -> &[usize] {
        &self.machine_order[job]
    }

    /// The operation durations of `job`, in route order.
    pub fn job_durations(&self, job: usize) -> &[u64] {
        &self.durations[job]
    }

    /// Sum of all processing times. An upper bound on any decoded makespan.
    pub fn total_work(&self) -> u64 {
        self.durations.iter().flatten().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_instance() {
        let inst = Instance::new(vec![vec![1, 0], vec![0, 1]], vec![vec![2, 3], vec![4, 5]])
            .unwrap();
        assert_eq!(inst.num_jobs(), 2);
        assert_eq!(inst.num_machines(), 2);
        assert_eq!(inst.operation_count(), 4);
        assert_eq!(inst.machine_for(0, 0), 1);
        assert_eq!(inst.duration_of(1, 1), 5);
        assert_eq!(inst.job_route(0), &[1, 0]);
        assert_eq!(inst.job_durations(1), &[4, 5]);
        assert_eq!(inst.total_work(), 14);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Instance::new(vec![], vec![]), Err(InstanceError::Empty));
        assert_eq!(
            Instance::new(vec![vec![]], vec![vec![]]),
            Err(InstanceError::Empty)
        );
    }

    #[test]
    fn test_row_count_mismatch() {
        let err = Instance::new(vec![vec![0, 1], vec![1, 0]], vec![vec![1, 1]]).unwrap_err();
        assert!(matches!(err, InstanceError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_column_count_mismatch() {
        let err =
            Instance::new(vec![vec![0, 1], vec![1, 0]], vec![vec![1, 1], vec![1]]).unwrap_err();
        assert!(matches!(err, InstanceError::DimensionMismatch { job: 1, .. }));
    }

    #[test]
    fn test_ragged_routes() {
        let err = Instance::new(vec![vec![0, 1], vec![0]], vec![vec![1, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            InstanceError::RaggedRow {
                job: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_machine_out_of_range() {
        let err = Instance::new(vec![vec![0, 2]], vec![vec![1, 1]]).unwrap_err();
        assert!(matches!(
            err,
            InstanceError::MachineOutOfRange { machine: 2, .. }
        ));
    }

    #[test]
    fn test_route_not_permutation() {
        let err = Instance::new(vec![vec![0, 1], vec![1, 1]], vec![vec![1, 1], vec![1, 1]])
            .unwrap_err();
        assert_eq!(err, InstanceError::NotAPermutation { job: 1, machine: 1 });
    }

    #[test]
    fn test_error_messages() {
        let err = InstanceError::NotAPermutation { job: 3, machine: 2 };
        assert!(err.to_string().contains("job 3"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_revalidates() {
        let ok: Instance =
            serde_json::from_str(r#"{"machine_order":[[0,1]],"durations":[[2,3]]}"#).unwrap();
        assert_eq!(ok.total_work(), 5);

        let bad = serde_json::from_str::<Instance>(
            r#"{"machine_order":[[0,0]],"durations":[[2,3]]}"#,
        );
        assert!(bad.is_err());
    }
}
