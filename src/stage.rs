//! Sleep-stage labels and the fixed scoring-label table.
//!
//! Scorers write stages as free text (`"Stage 2 sleep|2"`, `"REM sleep|5"`).
//! Only the first `|`-delimited token is looked up:
//!
//! ```text
//! "Stage 1 sleep" → N1
//! "Stage 2 sleep" → N2
//! "Stage 3 sleep" → N3
//! "Stage 4 sleep" → N3     (R&K stage 4 folds into AASM N3)
//! "REM sleep"     → REM
//! "Wake"          → Wake
//! anything else   → Unrecognized
//! ```
use std::fmt;

/// One of the five AASM sleep stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SleepStage {
    Wake,
    N1,
    N2,
    N3,
    Rem,
}

/// Result of looking up a raw label token in the stage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelClass {
    Stage(SleepStage),
    /// Not a sleep stage (arousals, desaturations, `Unscored`, …).
    Unrecognized,
}

impl SleepStage {
    /// All stages in result-key order.
    pub const ALL: [SleepStage; 5] = [
        SleepStage::Wake,
        SleepStage::N1,
        SleepStage::N2,
        SleepStage::N3,
        SleepStage::Rem,
    ];

    /// Non-REM stages, in the order their durations are concatenated.
    pub const NREM: [SleepStage; 3] = [SleepStage::N1, SleepStage::N2, SleepStage::N3];

    /// Short name used in result keys (`"Wake"`, `"N1"`, …, `"REM"`).
    pub fn name(self) -> &'static str {
        match self {
            SleepStage::Wake => "Wake",
            SleepStage::N1 => "N1",
            SleepStage::N2 => "N2",
            SleepStage::N3 => "N3",
            SleepStage::Rem => "REM",
        }
    }

    /// Position in [`SleepStage::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_nrem(self) -> bool {
        matches!(self, SleepStage::N1 | SleepStage::N2 | SleepStage::N3)
    }

    /// Classify a full event concept string (only the first `|` token counts).
    pub fn classify(concept: &str) -> LabelClass {
        match first_token(concept) {
            "Stage 1 sleep" => LabelClass::Stage(SleepStage::N1),
            "Stage 2 sleep" => LabelClass::Stage(SleepStage::N2),
            "Stage 3 sleep" | "Stage 4 sleep" => LabelClass::Stage(SleepStage::N3),
            "REM sleep" => LabelClass::Stage(SleepStage::Rem),
            "Wake" => LabelClass::Stage(SleepStage::Wake),
            _ => LabelClass::Unrecognized,
        }
    }
}

impl fmt::Display for SleepStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// First `|`-delimited token of an event concept. Not trimmed.
pub fn first_token(concept: &str) -> &str {
    concept.split('|').next().unwrap_or(concept)
}
