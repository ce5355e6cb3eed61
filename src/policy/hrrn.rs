use super::Policy;
use crate::core::{ProcId, ProcessRecord, SimState, Ticks};

// (waiting + service) / service, recomputed at every dispatch decision
fn response_ratio(clock: Ticks, proc: &ProcessRecord) -> f64 {
    let waiting = (clock - proc.arrival_time) as f64;
    (waiting + proc.service_time as f64) / proc.service_time as f64
}

pub struct HighestResponseRatio;

impl Policy for HighestResponseRatio {
    fn enqueue(&mut self, state: &mut SimState, proc: ProcId) {
        state.ready.push_back(proc);
    }

    fn select(&mut self, state: &mut SimState) -> Option<ProcId> {
        let clock = state.clock;
        let mut best: Option<(usize, f64)> = None;
        for (pos, id) in state.ready.iter().enumerate() {
            let ratio = response_ratio(clock, state.proc(id));
            // Strictly greater, so ties keep the earliest queue position
            match best {
                Some((_, top)) if ratio <= top => {}
                _ => best = Some((pos, ratio)),
            }
        }
        best.map(|(pos, _)| state.ready.remove_at(pos))
    }
}
