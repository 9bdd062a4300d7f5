//! Per-stage grouping of run durations.
use crate::merge::MergedRun;
use crate::stage::SleepStage;

/// Run durations grouped by stage, each list in run order.
///
/// Every stage has a list; a stage that never occurs has an empty one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageDurations {
    lists: [Vec<f64>; 5],
}

impl StageDurations {
    pub fn from_runs(runs: &[MergedRun]) -> Self {
        let mut out = Self::default();
        for run in runs {
            out.lists[run.stage.index()].push(run.total_duration);
        }
        out
    }

    /// Durations of all runs of `stage`.
    pub fn get(&self, stage: SleepStage) -> &[f64] {
        &self.lists[stage.index()]
    }

    /// Concatenation of every stage's list (Wake, N1, N2, N3, REM).
    pub fn all(&self) -> Vec<f64> {
        self.concat(&SleepStage::ALL)
    }

    /// Concatenation of the N1, N2 and N3 lists.
    pub fn nrem(&self) -> Vec<f64> {
        self.concat(&SleepStage::NREM)
    }

    pub fn n_runs(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SleepStage, &[f64])> + '_ {
        SleepStage::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    fn concat(&self, stages: &[SleepStage]) -> Vec<f64> {
        stages.iter().flat_map(|&s| self.get(s).iter().copied()).collect()
    }
}
