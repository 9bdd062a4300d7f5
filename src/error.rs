//! Error types.
//!
//! Two independent failure domains: the recording header ([`RecordingReadError`])
//! and the scoring annotation ([`ParseError`]). Both abort the pipeline.
//! An annotation with no sleep stages is *not* an error; see
//! [`EntropyOutcome::Empty`](crate::entropy::EntropyOutcome::Empty).
use std::path::PathBuf;
use thiserror::Error;

/// The annotation document could not be turned into stage events.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("read annotation {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("annotation is not valid UTF-8 (byte {valid_up_to}) and declares no single-byte encoding")]
    NotUtf8 { valid_up_to: usize },

    #[error("unsupported annotation encoding {encoding:?}")]
    UnsupportedEncoding { encoding: String },

    #[error("malformed annotation XML")]
    Xml(#[from] roxmltree::Error),

    #[error("ScoredEvent #{index}: missing <{field}>")]
    MissingField { index: usize, field: &'static str },

    #[error("ScoredEvent #{index}: <{field}> is not a number: {value:?}")]
    InvalidNumber {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("ScoredEvent #{index}: <{field}> out of range: {value}")]
    OutOfRange {
        index: usize,
        field: &'static str,
        value: f64,
    },
}

/// The recording file could not be opened or its duration read.
#[derive(Debug, Error)]
pub enum RecordingReadError {
    #[error("open recording {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("recording {path}: header truncated ({needed} bytes needed)")]
    Truncated { path: PathBuf, needed: usize },

    #[error("recording {path}: invalid header field {field}: {value:?}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        value: String,
    },

    #[error("recording {path}: number of data records is unknown (-1)")]
    UnknownRecordCount { path: PathBuf },
}

/// Any fatal pipeline error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Recording(#[from] RecordingReadError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
