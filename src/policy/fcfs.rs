use super::Policy;
use crate::core::{ProcId, SimState};

// Arrival order; runs to completion once dispatched
pub struct FirstComeFirstServed;

impl Policy for FirstComeFirstServed {
    fn enqueue(&mut self, state: &mut SimState, proc: ProcId) {
        state.ready.push_back(proc);
    }

    fn select(&mut self, state: &mut SimState) -> Option<ProcId> {
        state.ready.pop_next()
    }
}
