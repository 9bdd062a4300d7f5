//! Run-length merging of consecutive identical stages.
//!
//! `[W 30][W 30][N2 60][N2 30][W 30]` → `[W 60][N2 90][W 30]`
//!
//! Only *adjacent* events are compared; a stage that reappears later opens a
//! new run. Order is preserved.
use crate::annotation::StageEvent;
use crate::stage::SleepStage;

/// A maximal run of consecutive events with the same stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergedRun {
    pub stage: SleepStage,
    /// Start of the first event in the run.
    pub start: f64,
    /// Sum of the event durations.
    pub total_duration: f64,
    /// Number of events folded into this run.
    pub n_events: usize,
}

impl MergedRun {
    /// The run viewed as a single event.
    pub fn as_event(&self) -> StageEvent {
        StageEvent::new(self.stage, self.start, self.total_duration)
    }
}

/// Collapse consecutive same-stage events into runs.
pub fn merge_runs(events: &[StageEvent]) -> Vec<MergedRun> {
    let mut runs: Vec<MergedRun> = Vec::new();
    for ev in events {
        match runs.last_mut() {
            Some(run) if run.stage == ev.stage => {
                run.total_duration += ev.duration;
                run.n_events += 1;
            }
            _ => runs.push(MergedRun {
                stage: ev.stage,
                start: ev.start,
                total_duration: ev.duration,
                n_events: 1,
            }),
        }
    }
    runs
}
