pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::Engine;
pub use event::EngineEvent;
pub use state::{ProcId, ProcState, ProcessRecord, ReadyQueue, SchedKey, SimState, Ticks};
