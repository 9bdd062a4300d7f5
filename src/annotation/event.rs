//! Normalisation of raw scored events into [`StageEvent`]s.
//!
//! For each raw event, in document order:
//! 1. parse `Start` and `Duration` as finite `f64` (surrounding whitespace allowed);
//! 2. classify the first `EventConcept` token;
//! 3. keep stage events (after checking `start ≥ 0`, `duration > 0`),
//!    tally everything else by its label token.
use std::collections::BTreeMap;

use super::xml::{RawScoredEvent, DURATION, START};
use crate::error::ParseError;
use crate::stage::{first_token, LabelClass, SleepStage};

/// One scored sleep-stage interval, in seconds from recording start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageEvent {
    pub stage: SleepStage,
    pub start: f64,
    pub duration: f64,
}

impl StageEvent {
    pub fn new(stage: SleepStage, start: f64, duration: f64) -> Self {
        Self { stage, start, duration }
    }
}

/// Count of discarded events per first label token.
pub type DropTally = BTreeMap<String, usize>;

/// Stage events extracted from one annotation document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedAnnotation {
    /// Recognised stage events in document order.
    pub events: Vec<StageEvent>,
    /// Events whose label is not a sleep stage.
    pub dropped: DropTally,
    /// Number of `ScoredEvent` nodes seen.
    pub n_scored: usize,
}

impl ParsedAnnotation {
    pub fn n_dropped(&self) -> usize {
        self.dropped.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Convert raw events to stage events.
pub fn normalize_events(raw: &[RawScoredEvent]) -> Result<ParsedAnnotation, ParseError> {
    let mut out = ParsedAnnotation {
        events: Vec::with_capacity(raw.len()),
        dropped: DropTally::new(),
        n_scored: raw.len(),
    };

    for ev in raw {
        let start = parse_seconds(ev.index, START, &ev.start)?;
        let duration = parse_seconds(ev.index, DURATION, &ev.duration)?;

        match SleepStage::classify(&ev.concept) {
            LabelClass::Stage(stage) => {
                if start < 0.0 {
                    return Err(ParseError::OutOfRange { index: ev.index, field: START, value: start });
                }
                if duration <= 0.0 {
                    return Err(ParseError::OutOfRange {
                        index: ev.index,
                        field: DURATION,
                        value: duration,
                    });
                }
                out.events.push(StageEvent { stage, start, duration });
            }
            LabelClass::Unrecognized => {
                *out.dropped.entry(first_token(&ev.concept).to_string()).or_insert(0) += 1;
            }
        }
    }
    Ok(out)
}

fn parse_seconds(index: usize, field: &'static str, text: &str) -> Result<f64, ParseError> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidNumber { index, field, value: text.to_string() }),
    }
}
