//! Sleep-stage annotation reader.
//!
//! # Quick start
//! ```no_run
//! use sleep_entropy::annotation::parse_annotation;
//!
//! let ann = parse_annotation("shhs1-200001-nsrr.xml").unwrap();
//! println!("{} stage events, {} dropped", ann.events.len(), ann.n_dropped());
//! ```
pub mod event;
pub mod xml;

use std::path::Path;

use crate::error::ParseError;

pub use event::{normalize_events, DropTally, ParsedAnnotation, StageEvent};
pub use xml::{decode_document, read_scored_events, RawScoredEvent};

/// Read and normalise an annotation file.
pub fn parse_annotation<P: AsRef<Path>>(path: P) -> Result<ParsedAnnotation, ParseError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|source| ParseError::Read { path: path.to_path_buf(), source })?;
    parse_annotation_bytes(&bytes)
}

/// Parse raw document bytes, honouring the declared encoding.
pub fn parse_annotation_bytes(bytes: &[u8]) -> Result<ParsedAnnotation, ParseError> {
    parse_annotation_str(&decode_document(bytes)?)
}

/// Parse an annotation document already held in memory.
pub fn parse_annotation_str(text: &str) -> Result<ParsedAnnotation, ParseError> {
    let raw = read_scored_events(text)?;
    let parsed = normalize_events(&raw)?;
    log::debug!(
        "{} ScoredEvent nodes → {} stage events, dropped {:?}",
        parsed.n_scored,
        parsed.events.len(),
        parsed.dropped
    );
    Ok(parsed)
}
