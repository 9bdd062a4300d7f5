//! Shannon entropy of stage-duration distributions.
//!
//! For a list of run durations `d`:
//!
//! ```text
//! p_i = d_i / Σ d
//! H   = -Σ_{p_i > 0} p_i · log2(p_i)        [bits]
//! ```
//!
//! A list with fewer than two durations has no distribution to speak of and
//! yields `None` ("undefined"), never `0.0`.
use ndarray::ArrayView1;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::collect::StageDurations;
use crate::stage::SleepStage;

/// Minimum number of durations for a defined entropy.
pub const MIN_SAMPLES: usize = 2;

pub const OVERALL_KEY: &str = "Overall_Time_Entropy";
pub const NREM_KEY: &str = "NREM_Time_Entropy";

/// Shannon entropy (bits) of the distribution `values / Σ values`.
///
/// Returns `None` when `values.len() < 2`. Zero entries contribute nothing.
/// A non-positive total carries no mass and gives `Some(0.0)`.
///
/// # Examples
///
/// ```
/// use sleep_entropy::entropy::shannon_entropy;
///
/// assert_eq!(shannon_entropy(&[30.0]), None);
/// assert_eq!(shannon_entropy(&[30.0, 30.0]), Some(1.0));
/// ```
pub fn shannon_entropy(values: &[f64]) -> Option<f64> {
    if values.len() < MIN_SAMPLES {
        return None;
    }
    let d = ArrayView1::from(values);
    let total = d.sum();
    if total <= 0.0 {
        return Some(0.0);
    }

    let mut h = 0.0;
    for &v in d.iter() {
        let p = v / total;
        if p > 0.0 {
            h -= p * p.log2();
        }
    }
    Some(h)
}

/// Result key for a stage (`"N2_Time_Entropy"`).
pub fn stage_key(stage: SleepStage) -> String {
    format!("{}_Time_Entropy", stage.name())
}

/// Entropy per stage plus the overall and NREM aggregates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyResult {
    stages: [Option<f64>; 5],
    overall: Option<f64>,
    nrem: Option<f64>,
}

impl EntropyResult {
    pub fn from_durations(durations: &StageDurations) -> Self {
        let mut stages = [None; 5];
        for (stage, list) in durations.iter() {
            stages[stage.index()] = shannon_entropy(list);
        }
        Self {
            stages,
            overall: shannon_entropy(&durations.all()),
            nrem: shannon_entropy(&durations.nrem()),
        }
    }

    pub fn stage(&self, stage: SleepStage) -> Option<f64> {
        self.stages[stage.index()]
    }

    pub fn overall(&self) -> Option<f64> {
        self.overall
    }

    pub fn nrem(&self) -> Option<f64> {
        self.nrem
    }

    /// Look up a value by result key. `None` for unknown keys *and* for
    /// undefined entropies; use [`EntropyResult::entries`] to tell them apart.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries().find(|(k, _)| k == key).and_then(|(_, v)| v)
    }

    /// All seven `(key, value)` pairs: the five stages, then overall, then NREM.
    pub fn entries(&self) -> impl Iterator<Item = (String, Option<f64>)> + '_ {
        SleepStage::ALL
            .into_iter()
            .map(move |s| (stage_key(s), self.stage(s)))
            .chain([
                (OVERALL_KEY.to_string(), self.overall),
                (NREM_KEY.to_string(), self.nrem),
            ])
    }
}

impl Serialize for EntropyResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SleepStage::ALL.len() + 2))?;
        for (k, v) in self.entries() {
            map.serialize_entry(&k, &v)?;
        }
        map.end()
    }
}

/// Outcome of the entropy computation for one recording.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntropyOutcome {
    /// The annotation held no recognised sleep-stage events.
    Empty,
    Computed(EntropyResult),
}

impl EntropyOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, EntropyOutcome::Empty)
    }

    pub fn result(&self) -> Option<&EntropyResult> {
        match self {
            EntropyOutcome::Empty => None,
            EntropyOutcome::Computed(r) => Some(r),
        }
    }
}

impl Serialize for EntropyOutcome {
    /// `Empty` is written as an empty map.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EntropyOutcome::Empty => serializer.serialize_map(Some(0))?.end(),
            EntropyOutcome::Computed(r) => r.serialize(serializer),
        }
    }
}
