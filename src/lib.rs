//! # sleep_entropy: temporal entropy of sleep-stage durations
//!
//! Given an overnight polysomnography recording (EDF) and its stage scoring
//! (NSRR-style XML), `sleep_entropy` measures how irregular the time spent in
//! each sleep stage is: consecutive epochs of the same stage are merged into
//! runs, and the Shannon entropy of each stage's run-duration distribution is
//! reported in bits.
//!
//! ## Pipeline overview
//!
//! ```text
//! recording.edf ── recording::read_recording_info()   total duration (logged only)
//!
//! annotation.xml
//!   │
//!   ├─ annotation::parse_annotation()   ScoredEvent → StageEvent, unknown labels dropped
//!   ├─ merge::merge_runs()              adjacent same-stage events → MergedRun
//!   ├─ collect::StageDurations          run durations grouped per stage
//!   └─ entropy::EntropyResult           H = −Σ p·log2 p per stage, overall, NREM
//!        │
//!        └─→ EntropyOutcome::{Empty, Computed(EntropyResult)}
//! ```
//!
//! ## Quick start
//!
//! ```no_run
//! use sleep_entropy::{sleep_temporal_entropy, EntropyConfig};
//!
//! let report = sleep_temporal_entropy(
//!     "shhs1-200001.edf",
//!     "shhs1-200001-nsrr.xml",
//!     &EntropyConfig::default(),
//! ).unwrap();
//!
//! if let Some(result) = report.outcome.result() {
//!     for (key, value) in result.entries() {
//!         println!("{key}: {value:?}");
//!     }
//! }
//! ```
//!
//! ## Running individual steps
//!
//! ```
//! use sleep_entropy::annotation::StageEvent;
//! use sleep_entropy::collect::StageDurations;
//! use sleep_entropy::entropy::EntropyResult;
//! use sleep_entropy::merge::merge_runs;
//! use sleep_entropy::SleepStage::*;
//!
//! let events = [
//!     StageEvent::new(Wake, 0.0, 30.0),
//!     StageEvent::new(Wake, 30.0, 30.0),
//!     StageEvent::new(N2, 60.0, 30.0),
//!     StageEvent::new(Wake, 90.0, 30.0),
//! ];
//! let runs = merge_runs(&events);                 // [W 60] [N2 30] [W 30]
//! let durations = StageDurations::from_runs(&runs);
//! let result = EntropyResult::from_durations(&durations);
//!
//! assert_eq!(result.stage(N2), None);             // one run: undefined
//! assert!(result.stage(Wake).unwrap() > 0.9);     // H(2/3, 1/3) ≈ 0.918
//! ```

pub mod annotation;
pub mod collect;
pub mod config;
pub mod entropy;
pub mod error;
pub mod merge;
pub mod recording;
pub mod stage;

use std::path::Path;

// ── Crate-root re-exports ─────────────────────────────────────────────────

pub use annotation::{
    parse_annotation, parse_annotation_bytes, parse_annotation_str, DropTally, ParsedAnnotation,
    StageEvent,
};
pub use collect::StageDurations;
pub use config::EntropyConfig;
pub use entropy::{shannon_entropy, EntropyOutcome, EntropyResult};
pub use error::{Error, ParseError, RecordingReadError, Result};
pub use merge::{merge_runs, MergedRun};
pub use recording::{read_recording_info, RecordingInfo};
pub use stage::{LabelClass, SleepStage};

/// Everything learned about one (recording, annotation) pair.
#[derive(Debug, Clone)]
pub struct EntropyReport {
    /// `None` only when the recording was optional and could not be read.
    pub recording: Option<RecordingInfo>,
    /// Number of `ScoredEvent` nodes in the annotation.
    pub n_scored: usize,
    /// Events discarded because their label is not a sleep stage.
    pub dropped: DropTally,
    /// Number of stage events kept.
    pub n_events: usize,
    /// Number of merged runs.
    pub n_runs: usize,
    pub outcome: EntropyOutcome,
}

/// Entropy of an ordered stage-event sequence.
///
/// Pure: merge → group → entropy. An empty sequence gives
/// [`EntropyOutcome::Empty`].
pub fn events_entropy(events: &[StageEvent]) -> EntropyOutcome {
    runs_entropy(&merge_runs(events))
}

/// Entropy of an already merged run sequence.
pub fn runs_entropy(runs: &[MergedRun]) -> EntropyOutcome {
    if runs.is_empty() {
        return EntropyOutcome::Empty;
    }
    let durations = StageDurations::from_runs(runs);
    EntropyOutcome::Computed(EntropyResult::from_durations(&durations))
}

/// Run the **full pipeline** on a recording / annotation file pair.
///
/// # Errors
///
/// * [`Error::Recording`] if the recording header cannot be read and
///   [`EntropyConfig::recording_required`] is set.
/// * [`Error::Parse`] if the annotation cannot be decoded or is malformed,
///   or if any `ScoredEvent` has a non-numeric (or non-finite) start or
///   duration.
/// * [`Error::Parse`] with [`ParseError::OutOfRange`] if a *sleep-stage*
///   event has `start < 0` or `duration <= 0`. Such events are rejected
///   rather than folded into the runs, so annotation files that other
///   tools tolerate can fail here. Non-stage events are not range-checked.
///
/// An annotation without any sleep-stage event is not an error: the report's
/// outcome is [`EntropyOutcome::Empty`].
pub fn sleep_temporal_entropy<P, Q>(
    recording_path: P,
    annotation_path: Q,
    cfg: &EntropyConfig,
) -> Result<EntropyReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let recording_path = recording_path.as_ref();
    let annotation_path = annotation_path.as_ref();
    log::info!("parsing recording {}", recording_path.display());
    log::info!("parsing annotation {}", annotation_path.display());

    let recording = match read_recording_info(recording_path) {
        Ok(info) => {
            log::info!(
                "recording duration: {} s ({} signals)",
                info.duration_secs(),
                info.n_signals()
            );
            Some(info)
        }
        Err(e) if !cfg.recording_required => {
            log::warn!("{e}; continuing without recording info");
            None
        }
        Err(e) => return Err(e.into()),
    };

    let parsed = parse_annotation(annotation_path)?;

    let runs = merge_runs(&parsed.events);
    let outcome = runs_entropy(&runs);
    if outcome.is_empty() {
        log::warn!("{}: no sleep-stage events, empty result", annotation_path.display());
    } else {
        log::info!("{} stage events in {} runs", parsed.events.len(), runs.len());
    }

    Ok(EntropyReport {
        recording,
        n_scored: parsed.n_scored,
        n_events: parsed.events.len(),
        dropped: parsed.dropped,
        n_runs: runs.len(),
        outcome,
    })
}
