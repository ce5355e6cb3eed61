use crate::core::ProcId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    Admitted {
        proc: ProcId,
    },
    Dispatched {
        proc: ProcId,
    },
    // Forced off the CPU: an expired slice or a shorter arrival
    Preempted {
        proc: ProcId,
    },
    Completed {
        proc: ProcId,
    },
    // CPU stayed empty even after a dispatch attempt
    CpuIdle,
}
