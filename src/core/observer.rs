use rustc_hash::FxHashSet;

use super::state::{ProcState, SimState};

#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn observe(&mut self, state: &SimState) {
        self.step += 1;
        debug_assert_eq!(
            state.clock, self.step,
            "clock must advance exactly once per tick"
        );

        let mut seen = FxHashSet::default();

        for &id in state.pending_ids() {
            debug_assert!(seen.insert(id), "process {id} present in two containers");
            let proc = state.proc(id);
            debug_assert_eq!(
                proc.state,
                ProcState::Unarrived,
                "pending process {id} has left the Unarrived state"
            );
            debug_assert!(
                proc.arrival_time >= state.clock,
                "pending process {id} missed its arrival tick"
            );
        }

        for id in state.ready.iter() {
            debug_assert!(seen.insert(id), "process {id} present in two containers");
            let proc = state.proc(id);
            debug_assert_eq!(
                proc.state,
                ProcState::Ready,
                "queued process {id} is not Ready"
            );
            debug_assert!(
                proc.remaining_service > 0,
                "queued process {id} has no service remaining"
            );
        }

        if let Some(id) = state.current {
            debug_assert!(seen.insert(id), "process {id} present in two containers");
            let proc = state.proc(id);
            debug_assert_eq!(
                proc.state,
                ProcState::Running,
                "current process {id} is not Running"
            );
            debug_assert!(
                proc.start_time.is_some(),
                "current process {id} was never marked started"
            );
            debug_assert!(
                proc.remaining_service > 0,
                "completed process {id} still occupies the CPU"
            );
        }

        let mut last_finish = 0;
        for &id in &state.finished {
            debug_assert!(seen.insert(id), "process {id} present in two containers");
            let proc = state.proc(id);
            debug_assert_eq!(
                proc.state,
                ProcState::Finished,
                "finished process {id} is not Finished"
            );
            debug_assert_eq!(
                proc.remaining_service, 0,
                "finished process {id} has service remaining"
            );
            let finish = proc
                .finish_time
                .expect("finished process missing finish time");
            debug_assert!(
                proc.turnaround_time.is_some() && proc.normalized_turnaround.is_some(),
                "finished process {id} missing derived statistics"
            );
            debug_assert!(
                finish >= last_finish,
                "finished sequence out of completion order at process {id}"
            );
            last_finish = finish;
        }

        debug_assert_eq!(
            seen.len(),
            state.procs.len(),
            "process records lost or duplicated"
        );
    }
}
