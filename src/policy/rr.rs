use super::Policy;
use crate::core::{ProcId, ProcessRecord, SimState, Ticks};

// Fifo with a fixed slice; an expired process rejoins at the tail
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    pub fn new(quantum: Ticks) -> Self {
        assert!(quantum > 0, "round robin quantum must be positive");
        Self { quantum }
    }
}

impl Policy for RoundRobin {
    fn enqueue(&mut self, state: &mut SimState, proc: ProcId) {
        state.ready.push_back(proc);
    }

    fn select(&mut self, state: &mut SimState) -> Option<ProcId> {
        state.ready.pop_next()
    }

    fn slice(&self, _proc: &ProcessRecord) -> Option<Ticks> {
        Some(self.quantum)
    }
}
