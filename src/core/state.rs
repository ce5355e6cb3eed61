use keyed_priority_queue::KeyedPriorityQueue;
use std::collections::VecDeque;

// Index into the process table Vec
pub type ProcId = usize;
pub type Ticks = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    Unarrived,
    Ready,
    Running,
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    pub name: String,
    pub arrival_time: Ticks,
    pub service_time: Ticks,
    pub remaining_service: Ticks,
    pub start_time: Option<Ticks>,
    pub finish_time: Option<Ticks>,
    pub turnaround_time: Option<Ticks>,
    pub normalized_turnaround: Option<f64>,
    // Slice the feedback policy grants on the next dispatch
    pub feedback_quantum: Ticks,
    pub allocated_slice: Option<Ticks>,
    pub consumed_slice: Ticks,
    pub state: ProcState,
}

impl ProcessRecord {
    pub fn new(name: impl Into<String>, arrival_time: Ticks, service_time: Ticks) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            service_time,
            remaining_service: service_time,
            start_time: None,
            finish_time: None,
            turnaround_time: None,
            normalized_turnaround: None,
            feedback_quantum: 1,
            allocated_slice: None,
            consumed_slice: 0,
            state: ProcState::Unarrived,
        }
    }

    // First occupancy only; redundant calls never overwrite
    pub fn mark_started(&mut self, tick: Ticks) {
        if self.start_time.is_none() {
            self.start_time = Some(tick);
        }
    }

    // Returns true when the process finished on this tick
    pub fn consume_one_tick(&mut self, tick: Ticks) -> bool {
        assert!(
            self.remaining_service > 0,
            "process {} ticked past completion",
            self.name
        );
        self.remaining_service -= 1;
        if self.remaining_service == 0 {
            let turnaround = tick - self.arrival_time;
            self.finish_time = Some(tick);
            self.turnaround_time = Some(turnaround);
            self.normalized_turnaround = Some(turnaround as f64 / self.service_time as f64);
            return true;
        }
        false
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_service == 0
    }

    pub fn slice_expired(&self) -> bool {
        self.allocated_slice == Some(self.consumed_slice) && !self.is_finished()
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct SchedKey {
    pub time: Ticks,
    pub seq: u64,
}

// KeyedPriorityQueue is a max-heap, so we flip SchedKey's Ord to surface the
// smallest time first (ties go to the earliest enqueue)
impl PartialOrd for SchedKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SchedKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug)]
pub enum ReadyQueue {
    Fifo {
        procs: VecDeque<ProcId>,
    },
    Priq {
        procs: KeyedPriorityQueue<ProcId, SchedKey>,
        next_seq: u64,
    },
}

impl ReadyQueue {
    pub fn new_fifo() -> Self {
        Self::Fifo {
            procs: VecDeque::new(),
        }
    }

    pub fn new_priq() -> Self {
        Self::Priq {
            procs: KeyedPriorityQueue::new(),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Fifo { procs } => procs.len(),
            Self::Priq { procs, .. } => procs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push_back(&mut self, proc: ProcId) {
        match self {
            Self::Fifo { procs } => procs.push_back(proc),
            Self::Priq { .. } => panic!("fifo push into a keyed ready queue"),
        }
    }

    pub fn push_keyed(&mut self, proc: ProcId, time: Ticks) {
        match self {
            Self::Fifo { .. } => panic!("keyed push into a fifo ready queue"),
            Self::Priq { procs, next_seq } => {
                let key = SchedKey {
                    time,
                    seq: *next_seq,
                };
                *next_seq += 1;
                procs.push(proc, key);
            }
        }
    }

    // Front of a fifo queue, or the best key of a keyed queue
    pub fn pop_next(&mut self) -> Option<ProcId> {
        match self {
            Self::Fifo { procs } => procs.pop_front(),
            Self::Priq { procs, .. } => procs.pop().map(|(proc, _)| proc),
        }
    }

    // Best key currently enqueued; None for fifo queues
    pub fn peek_key(&self) -> Option<SchedKey> {
        match self {
            Self::Fifo { .. } => None,
            Self::Priq { procs, .. } => procs.peek().map(|(_, key)| *key),
        }
    }

    pub fn remove_at(&mut self, pos: usize) -> ProcId {
        match self {
            Self::Fifo { procs } => procs.remove(pos).expect("ready position out of bounds"),
            Self::Priq { .. } => panic!("positional remove from a keyed ready queue"),
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = ProcId> + '_> {
        match self {
            Self::Fifo { procs } => Box::new(procs.iter().copied()),
            Self::Priq { procs, .. } => Box::new(procs.iter().map(|(proc, _)| *proc)),
        }
    }
}

#[derive(Debug)]
pub struct SimState {
    pub clock: Ticks,
    pub procs: Vec<ProcessRecord>,
    pub ready: ReadyQueue,
    pub current: Option<ProcId>,
    pub finished: Vec<ProcId>,
    pending: Vec<ProcId>,
}

impl SimState {
    pub fn new(records: Vec<ProcessRecord>, ready: ReadyQueue) -> Self {
        let pending = (0..records.len()).collect();
        Self {
            clock: 0,
            procs: records,
            ready,
            current: None,
            finished: Vec::new(),
            pending,
        }
    }

    pub fn proc(&self, id: ProcId) -> &ProcessRecord {
        &self.procs[id]
    }

    pub fn proc_mut(&mut self, id: ProcId) -> &mut ProcessRecord {
        &mut self.procs[id]
    }

    pub fn pending_ids(&self) -> &[ProcId] {
        &self.pending
    }

    pub fn advance_clock(&mut self, delta: Ticks) {
        self.clock = self.clock.saturating_add(delta);
    }

    // Stable partition of `pending`: processes whose arrival matches the
    // current clock leave in input order, the rest keep their relative order
    pub fn take_arrivals(&mut self) -> Vec<ProcId> {
        let due = self.clock;
        let procs = &self.procs;
        let (arrived, pending): (Vec<ProcId>, Vec<ProcId>) = self
            .pending
            .drain(..)
            .partition(|&id| procs[id].arrival_time == due);
        self.pending = pending;
        arrived
    }

    pub fn mark_ready(&mut self, id: ProcId) {
        let proc = &mut self.procs[id];
        debug_assert_ne!(
            proc.state,
            ProcState::Finished,
            "finished process {id} cannot re-enter the ready queue"
        );
        proc.state = ProcState::Ready;
    }

    pub fn set_running(&mut self, id: ProcId, slice: Option<Ticks>) {
        debug_assert!(
            self.current.is_none(),
            "CPU already occupied while dispatching process {id}"
        );
        let proc = &mut self.procs[id];
        proc.state = ProcState::Running;
        proc.allocated_slice = slice;
        proc.consumed_slice = 0;
        self.current = Some(id);
    }

    pub fn clear_cpu(&mut self) {
        self.current = None;
    }

    pub fn mark_finished(&mut self, id: ProcId) {
        let proc = &mut self.procs[id];
        debug_assert!(
            proc.is_finished(),
            "process {id} marked finished with service remaining"
        );
        proc.state = ProcState::Finished;
        self.finished.push(id);
    }

    pub fn is_drained(&self) -> bool {
        self.pending.is_empty() && self.ready.is_empty() && self.current.is_none()
    }

    // Finished records in completion order; consumes the table
    pub fn into_finished_records(self) -> Vec<ProcessRecord> {
        let SimState {
            procs, finished, ..
        } = self;
        let mut slots: Vec<Option<ProcessRecord>> = procs.into_iter().map(Some).collect();
        finished
            .into_iter()
            .map(|id| slots[id].take().expect("finished id listed twice"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sched_key_surfaces_smallest_time_first() {
        let mut queue = KeyedPriorityQueue::new();
        queue.push(0usize, SchedKey { time: 5, seq: 0 });
        queue.push(1usize, SchedKey { time: 2, seq: 1 });
        queue.push(2usize, SchedKey { time: 2, seq: 2 });
        assert_eq!(queue.pop().map(|(id, _)| id), Some(1));
        assert_eq!(queue.pop().map(|(id, _)| id), Some(2));
        assert_eq!(queue.pop().map(|(id, _)| id), Some(0));
    }

    #[test]
    fn mark_started_never_overwrites() {
        let mut proc = ProcessRecord::new("a", 0, 3);
        proc.mark_started(4);
        proc.mark_started(9);
        assert_eq!(proc.start_time, Some(4));
    }

    #[test]
    fn consume_one_tick_fills_derived_fields_on_completion() {
        let mut proc = ProcessRecord::new("a", 2, 2);
        assert!(!proc.consume_one_tick(5));
        assert!(proc.consume_one_tick(6));
        assert_eq!(proc.finish_time, Some(6));
        assert_eq!(proc.turnaround_time, Some(4));
        assert_eq!(proc.normalized_turnaround, Some(2.0));
    }

    #[test]
    #[should_panic(expected = "ticked past completion")]
    fn consume_one_tick_panics_past_completion() {
        let mut proc = ProcessRecord::new("a", 0, 1);
        proc.consume_one_tick(1);
        proc.consume_one_tick(2);
    }
}
