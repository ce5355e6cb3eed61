use super::Policy;
use crate::core::{ProcId, ReadyQueue, SimState};

pub struct ShortestRemainingTime;

impl Policy for ShortestRemainingTime {
    fn init(&self) -> ReadyQueue {
        ReadyQueue::new_priq()
    }

    fn enqueue(&mut self, state: &mut SimState, proc: ProcId) {
        let remaining = state.proc(proc).remaining_service;
        state.ready.push_keyed(proc, remaining);
    }

    fn select(&mut self, state: &mut SimState) -> Option<ProcId> {
        state.ready.pop_next()
    }

    // A strictly shorter ready process takes the CPU; equal remaining never
    // preempts
    fn preempts(&self, state: &SimState, running: ProcId) -> bool {
        match state.ready.peek_key() {
            Some(key) => key.time < state.proc(running).remaining_service,
            None => false,
        }
    }
}
