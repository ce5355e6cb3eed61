pub mod fcfs;
pub mod feedback;
pub mod hrrn;
pub mod rr;
pub mod spn;
pub mod srt;

use std::fmt;
use std::str::FromStr;

use crate::core::{ProcId, ProcessRecord, ReadyQueue, SimState, Ticks};
use crate::error::SimError;

pub use fcfs::FirstComeFirstServed;
pub use feedback::Feedback;
pub use hrrn::HighestResponseRatio;
pub use rr::RoundRobin;
pub use spn::ShortestProcessNext;
pub use srt::ShortestRemainingTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    FCFS,
    SPN,
    SRT,
    HRRN,
    RR,
    FB,
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Discipline::FCFS => write!(f, "FCFS"),
            Discipline::SPN => write!(f, "SPN"),
            Discipline::SRT => write!(f, "SRT"),
            Discipline::HRRN => write!(f, "HRRN"),
            Discipline::RR => write!(f, "RR"),
            Discipline::FB => write!(f, "FB"),
        }
    }
}

impl FromStr for Discipline {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FCFS" => Ok(Discipline::FCFS),
            "SPN" => Ok(Discipline::SPN),
            "SRT" => Ok(Discipline::SRT),
            "HRRN" => Ok(Discipline::HRRN),
            "RR" => Ok(Discipline::RR),
            "FB" => Ok(Discipline::FB),
            _ => Err(SimError::UnknownDiscipline(s.to_string())),
        }
    }
}

pub trait Policy {
    // Ready-queue storage this policy dispatches from
    fn init(&self) -> ReadyQueue {
        ReadyQueue::new_fifo()
    }

    // Admission and requeue-after-preemption both land here
    fn enqueue(&mut self, state: &mut SimState, proc: ProcId);

    // Remove and return the next process to occupy the CPU
    fn select(&mut self, state: &mut SimState) -> Option<ProcId>;

    // Contiguous ticks granted at dispatch; None runs to completion
    fn slice(&self, _proc: &ProcessRecord) -> Option<Ticks> {
        None
    }

    // Called when a granted slice runs out, before the process is requeued
    fn on_slice_expired(&self, _proc: &mut ProcessRecord) {}

    // Whether the running process must yield the CPU this tick
    fn preempts(&self, _state: &SimState, _running: ProcId) -> bool {
        false
    }
}

pub fn build_policy(
    discipline: Discipline,
    quantum: Option<Ticks>,
) -> Result<Box<dyn Policy>, SimError> {
    match discipline {
        Discipline::FCFS => Ok(Box::new(FirstComeFirstServed)),
        Discipline::SPN => Ok(Box::new(ShortestProcessNext)),
        Discipline::SRT => Ok(Box::new(ShortestRemainingTime)),
        Discipline::HRRN => Ok(Box::new(HighestResponseRatio)),
        Discipline::RR => match quantum {
            Some(quantum) if quantum > 0 => Ok(Box::new(RoundRobin::new(quantum))),
            _ => Err(SimError::MissingQuantum(discipline)),
        },
        Discipline::FB => Ok(Box::new(Feedback)),
    }
}
