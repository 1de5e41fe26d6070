//! List-scheduling decoder and makespan evaluator.
//!
//! The sequence is simulated left to right. Each operation starts at the
//! latest of three times: the running dispatch cursor (start time of the
//! previously dispatched operation), the moment its machine becomes free,
//! and the moment its job's previous operation finishes. The cursor never
//! moves backwards, so start times are non-decreasing in sequence order.
//!
//! Every decode is O(N × M) and allocation-light; it is the hot path of the
//! annealing search.

use crate::instance::Instance;

/// One operation placed on the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledOperation {
    pub job: usize,
    /// Index of the operation within its job's route.
    pub operation: usize,
    pub machine: usize,
    pub start: u64,
    pub finish: u64,
}

/// Simulation state shared by all decode entry points.
struct Dispatcher<'a> {
    instance: &'a Instance,
    cursor: u64,
    available: Vec<u64>,
    job_ready: Vec<u64>,
    progress: Vec<usize>,
}

impl<'a> Dispatcher<'a> {
    fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            cursor: 0,
            available: vec![0; instance.num_machines()],
            job_ready: vec![0; instance.num_jobs()],
            progress: vec![0; instance.num_jobs()],
        }
    }

    #[inline]
    fn dispatch(&mut self, job: usize) -> ScheduledOperation {
        let k = self.progress[job];
        let machine = self.instance.machine_for(job, k);
        let duration = self.instance.duration_of(job, k);

        let start = self
            .cursor
            .max(self.available[machine])
            .max(self.job_ready[job]);
        let finish = start + duration;

        self.cursor = start;
        self.available[machine] = finish;
        self.job_ready[job] = finish;
        self.progress[job] += 1;

        ScheduledOperation {
            job,
            operation: k,
            machine,
            start,
            finish,
        }
    }
}

/// Decodes `sequence` and returns each machine's last finish time.
///
/// `sequence` must satisfy the multiset invariant for `instance`
/// (see [`OperationSequence`](super::OperationSequence)).
///
/// # Panics
/// Panics if a job id is out of range or occurs more than M times.
pub fn finish_times(instance: &Instance, sequence: &[usize]) -> Vec<u64> {
    let mut dispatcher = Dispatcher::new(instance);
    for &job in sequence {
        dispatcher.dispatch(job);
    }
    dispatcher.available
}

/// Makespan of `sequence`: the latest machine finish time.
pub fn makespan(instance: &Instance, sequence: &[usize]) -> u64 {
    finish_times(instance, sequence)
        .into_iter()
        .max()
        .unwrap_or(0)
}

/// Decodes `sequence` into explicit start/finish times, in dispatch order.
pub fn timetable(instance: &Instance, sequence: &[usize]) -> Vec<ScheduledOperation> {
    let mut dispatcher = Dispatcher::new(instance);
    sequence.iter().map(|&job| dispatcher.dispatch(job)).collect()
}
