//! Swap neighborhood.
//!
//! A move transposes two positions of the sequence that hold different
//! job ids. Swapping preserves the job multiset, so every neighbor is a
//! valid schedule.

use rand::Rng;

use super::OperationSequence;

/// Swaps two uniformly chosen positions holding different job ids.
///
/// Returns the swapped positions, or `None` when every entry is the same
/// job (no non-trivial move exists) and the buffer is left untouched.
pub fn swap_in_place<R: Rng>(jobs: &mut [usize], rng: &mut R) -> Option<(usize, usize)> {
    let first = *jobs.first()?;
    if jobs.iter().all(|&j| j == first) {
        return None;
    }

    // Rejection sampling over ordered position pairs is uniform over the
    // pairs with distinct values.
    let n = jobs.len();
    loop {
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        if jobs[i] != jobs[j] {
            jobs.swap(i, j);
            return Some((i, j));
        }
    }
}

/// Returns a copy of `sequence` with one non-trivial swap applied.
///
/// `sequence` itself is never modified.
pub fn swap_neighbor<R: Rng>(sequence: &OperationSequence, rng: &mut R) -> OperationSequence {
    let mut neighbor = sequence.clone();
    swap_in_place(neighbor.as_mut_slice(), rng);
    neighbor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{ft06, Instance};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_swap_changes_exactly_two_positions() {
        let inst = ft06();
        let mut rng = StdRng::seed_from_u64(42);
        let seq = OperationSequence::random(&inst, &mut rng);
        for _ in 0..100 {
            let next = swap_neighbor(&seq, &mut rng);
            let diff: Vec<usize> = (0..seq.len())
                .filter(|&p| seq.as_slice()[p] != next.as_slice()[p])
                .collect();
            assert_eq!(diff.len(), 2);
            let (a, b) = (diff[0], diff[1]);
            assert_eq!(seq.as_slice()[a], next.as_slice()[b]);
            assert_eq!(seq.as_slice()[b], next.as_slice()[a]);
        }
    }

    #[test]
    fn test_swap_in_place_reports_positions() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut jobs = vec![0, 0, 1, 1];
        let (i, j) = swap_in_place(&mut jobs, &mut rng).unwrap();
        assert_ne!(jobs[i], jobs[j]);
        assert_eq!(jobs.iter().filter(|&&x| x == 0).count(), 2);
    }

    #[test]
    fn test_single_job_has_no_move() {
        let inst = Instance::new(vec![vec![0, 1, 2]], vec![vec![1, 2, 3]]).unwrap();
        let seq = OperationSequence::ordered(&inst);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(swap_neighbor(&seq, &mut rng), seq);

        let mut empty: Vec<usize> = Vec::new();
        assert_eq!(swap_in_place(&mut empty, &mut rng), None);
    }

    #[test]
    fn test_all_distinct_pairs_reachable() {
        let mut rng = StdRng::seed_from_u64(9);
        let base = vec![0, 1, 1];
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let mut jobs = base.clone();
            let (i, j) = swap_in_place(&mut jobs, &mut rng).unwrap();
            seen.insert((i.min(j), i.max(j)));
        }
        assert_eq!(seen.len(), 2);
        assert!(seen.contains(&(0, 1)));
        assert!(seen.contains(&(0, 2)));
    }

    proptest! {
        #[test]
        fn prop_neighbor_chain_preserves_multiset(seed in any::<u64>(), steps in 0usize..300) {
            let inst = ft06();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut seq = OperationSequence::random(&inst, &mut rng);
            prop_assert!(seq.is_valid_for(&inst));
            for _ in 0..steps {
                seq = swap_neighbor(&seq, &mut rng);
                prop_assert!(seq.is_valid_for(&inst));
            }
        }
    }
}
