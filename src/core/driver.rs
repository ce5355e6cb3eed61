use tracing::{debug, trace};

use super::{
    event::EngineEvent,
    observer::Observer,
    state::{ProcId, ProcessRecord, SimState, Ticks},
};
use crate::error::SimError;
use crate::policy::{build_policy, Discipline, Policy};

pub struct Engine {
    state: SimState,
    policy: Box<dyn Policy>,
    observer: Observer,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .field("observer", &self.observer)
            .finish_non_exhaustive()
    }
}

impl Engine {
    // Fails fast on a bad discipline/quantum pairing or a zero service time;
    // after construction the simulation cannot error
    pub fn new(
        discipline: Discipline,
        quantum: Option<Ticks>,
        records: Vec<ProcessRecord>,
    ) -> Result<Self, SimError> {
        let policy = build_policy(discipline, quantum)?;
        if let Some(record) = records.iter().find(|r| r.service_time == 0) {
            return Err(SimError::ZeroServiceTime(record.name.clone()));
        }
        let state = SimState::new(records, policy.init());
        Ok(Self {
            state,
            policy,
            observer: Observer::new(),
        })
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_drained()
    }

    // Drive the simulation until every process has finished, returning the
    // finished records in completion order
    pub fn run(mut self) -> Vec<ProcessRecord> {
        while !self.is_complete() {
            for event in self.step() {
                trace!(clock = self.state.clock, ?event, "tick");
            }
        }
        debug!(
            clock = self.state.clock,
            finished = self.state.finished.len(),
            "simulation drained"
        );
        self.state.into_finished_records()
    }

    // One tick: admit due arrivals, advance the clock, re-evaluate the CPU,
    // then burn one tick of service (or record an idle tick)
    pub fn step(&mut self) -> Vec<EngineEvent> {
        let mut events = Vec::new();

        for id in self.state.take_arrivals() {
            self.state.mark_ready(id);
            self.policy.enqueue(&mut self.state, id);
            events.push(EngineEvent::Admitted { proc: id });
        }

        self.state.advance_clock(1);

        if let Some(running) = self.state.current {
            if self.policy.preempts(&self.state, running) {
                self.requeue(running);
                events.push(EngineEvent::Preempted { proc: running });
            }
        }

        if self.state.current.is_none() {
            if let Some(next) = self.policy.select(&mut self.state) {
                let slice = self.policy.slice(self.state.proc(next));
                self.state.set_running(next, slice);
                events.push(EngineEvent::Dispatched { proc: next });
            }
        }

        match self.state.current {
            Some(id) => self.execute_tick(id, &mut events),
            None => events.push(EngineEvent::CpuIdle),
        }

        self.observer.observe(&self.state);
        events
    }

    fn execute_tick(&mut self, id: ProcId, events: &mut Vec<EngineEvent>) {
        let clock = self.state.clock;
        let proc = self.state.proc_mut(id);
        proc.mark_started(clock);
        let completed = proc.consume_one_tick(clock);
        proc.consumed_slice += 1;
        let expired = proc.slice_expired();

        if completed {
            self.state.clear_cpu();
            self.state.mark_finished(id);
            events.push(EngineEvent::Completed { proc: id });
        } else if expired {
            self.policy.on_slice_expired(self.state.proc_mut(id));
            self.requeue(id);
            events.push(EngineEvent::Preempted { proc: id });
        }
    }

    // Back to the tail of the ready queue, re-keyed by the policy
    fn requeue(&mut self, id: ProcId) {
        self.state.clear_cpu();
        self.state.mark_ready(id);
        self.policy.enqueue(&mut self.state, id);
    }
}
