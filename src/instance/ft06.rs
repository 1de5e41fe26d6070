//! Fisher & Thompson 6×6 benchmark (ft06).
//!
//! # Reference
//! Fisher & Thompson (1963), "Probabilistic learning combinations of local
//! job-shop scheduling rules", in *Industrial Scheduling*, pp. 225-251.

use super::Instance;

/// Proven optimal makespan of ft06.
pub const FT06_OPTIMUM: u64 = 55;

const ROUTES: [[usize; 6]; 6] = [
    [2, 0, 1, 3, 5, 4],
    [1, 2, 4, 5, 0, 3],
    [2, 3, 5, 0, 1, 4],
    [1, 0, 2, 3, 4, 5],
    [2, 1, 4, 5, 0, 3],
    [1, 3, 5, 0, 4, 2],
];

const DURATIONS: [[u64; 6]; 6] = [
    [1, 3, 6, 7, 3, 6],
    [8, 5, 10, 10, 10, 4],
    [5, 4, 8, 9, 1, 7],
    [5, 5, 5, 3, 8, 9],
    [9, 3, 5, 4, 3, 1],
    [3, 3, 9, 10, 4, 1],
];

/// Returns the ft06 instance.
pub fn ft06() -> Instance {
    Instance {
        machine_order: ROUTES.iter().map(|r| r.to_vec()).collect(),
        durations: DURATIONS.iter().map(|r| r.to_vec()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ft06_is_valid() {
        let inst = ft06();
        let rebuilt = Instance::new(
            ROUTES.iter().map(|r| r.to_vec()).collect(),
            DURATIONS.iter().map(|r| r.to_vec()).collect(),
        )
        .unwrap();
        assert_eq!(inst, rebuilt);
        assert_eq!(inst.num_jobs(), 6);
        assert_eq!(inst.num_machines(), 6);
        assert_eq!(inst.total_work(), 197);
    }
}
