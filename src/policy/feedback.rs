use super::Policy;
use crate::core::{ProcId, ProcessRecord, SimState, Ticks};

// Slice granted once a process has survived its first one-tick slice
const PROMOTED_SLICE: Ticks = 2;

// Two-level feedback: the first dispatch grants a single tick, every later
// dispatch grants the longer low-priority slice
pub struct Feedback;

impl Policy for Feedback {
    fn enqueue(&mut self, state: &mut SimState, proc: ProcId) {
        state.ready.push_back(proc);
    }

    fn select(&mut self, state: &mut SimState) -> Option<ProcId> {
        state.ready.pop_next()
    }

    fn slice(&self, proc: &ProcessRecord) -> Option<Ticks> {
        Some(proc.feedback_quantum)
    }

    fn on_slice_expired(&self, proc: &mut ProcessRecord) {
        proc.feedback_quantum = PROMOTED_SLICE;
    }
}
