use super::Policy;
use crate::core::{ProcId, ReadyQueue, SimState};

// Shortest total service next; the keyed queue keeps ties in admission order
pub struct ShortestProcessNext;

impl Policy for ShortestProcessNext {
    fn init(&self) -> ReadyQueue {
        ReadyQueue::new_priq()
    }

    fn enqueue(&mut self, state: &mut SimState, proc: ProcId) {
        let service = state.proc(proc).service_time;
        state.ready.push_keyed(proc, service);
    }

    fn select(&mut self, state: &mut SimState) -> Option<ProcId> {
        state.ready.pop_next()
    }
}
