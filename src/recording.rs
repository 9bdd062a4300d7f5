//! EDF / EDF+ recording header reader.
//!
//! Only the header is read; no samples are decoded. The pipeline needs the
//! recording for one number, its total duration, which is logged next to the
//! entropy result.
//!
//! Fixed header (ASCII, space-padded, 256 bytes):
//! ```text
//! offset  len  field
//!      0    8  version                 "0"
//!      8   80  local patient id
//!     88   80  local recording id
//!    168    8  start date              dd.mm.yy
//!    176    8  start time              hh.mm.ss
//!    184    8  header size (bytes)     256 + ns × 256
//!    192   44  reserved                "EDF+C" / "EDF+D" / blank
//!    236    8  number of data records  -1 = unknown
//!    244    8  data record duration    seconds
//!    252    4  number of signals (ns)
//! ─────────────
//!    256
//! ```
//! followed by `ns × 16` bytes of signal labels (the first per-signal field).
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::RecordingReadError;

const FIXED_HEADER_LEN: usize = 256;
const LABEL_LEN: usize = 16;

/// Header summary of a recording.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingInfo {
    pub version:         String,
    pub patient:         String,
    pub recording:       String,
    pub start_date:      String,
    pub start_time:      String,
    pub header_bytes:    usize,
    /// `"EDF+C"`, `"EDF+D"` or empty for plain EDF.
    pub reserved:        String,
    pub n_records:       u64,
    /// Seconds per data record.
    pub record_duration: f64,
    pub labels:          Vec<String>,
}

impl RecordingInfo {
    /// Total recorded duration in seconds.
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        self.n_records as f64 * self.record_duration
    }

    #[inline]
    pub fn n_signals(&self) -> usize {
        self.labels.len()
    }

    /// `true` for EDF+ files (reserved field starts with `EDF+`).
    pub fn is_edf_plus(&self) -> bool {
        self.reserved.starts_with("EDF+")
    }
}

/// Open a recording and read its header.
pub fn read_recording_info<P: AsRef<Path>>(path: P) -> Result<RecordingInfo, RecordingReadError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|source| RecordingReadError::Open { path: path.to_path_buf(), source })?;
    let mut reader = BufReader::new(file);
    read_header(&mut reader, path)
}

/// Parse a header from any byte stream. `path` is used for error messages only.
pub fn read_header<R: Read>(reader: &mut R, path: &Path) -> Result<RecordingInfo, RecordingReadError> {
    let mut fixed = [0u8; FIXED_HEADER_LEN];
    read_block(reader, &mut fixed, path, FIXED_HEADER_LEN)?;

    let field = |lo: usize, hi: usize| ascii_field(&fixed[lo..hi]);
    let fields = HeaderFields { path };

    let n_records_raw = field(236, 244);
    let n_records: i64 = fields.number("number of data records", &n_records_raw)?;
    if n_records == -1 {
        return Err(RecordingReadError::UnknownRecordCount { path: path.to_path_buf() });
    }
    let n_records = u64::try_from(n_records)
        .map_err(|_| fields.invalid("number of data records", &n_records_raw))?;

    let duration_raw = field(244, 252);
    let record_duration: f64 = fields.number("data record duration", &duration_raw)?;
    if !record_duration.is_finite() || record_duration < 0.0 {
        return Err(fields.invalid("data record duration", &duration_raw));
    }

    let header_bytes: usize = fields.number("header size", &field(184, 192))?;
    let ns: usize = fields.number("number of signals", &field(252, 256))?;
    let expected = FIXED_HEADER_LEN + ns * FIXED_HEADER_LEN;
    if header_bytes != expected {
        log::warn!(
            "{}: header size field is {header_bytes}, expected {expected} for {ns} signals",
            path.display()
        );
    }

    let mut label_block = vec![0u8; ns * LABEL_LEN];
    read_block(reader, &mut label_block, path, FIXED_HEADER_LEN + ns * LABEL_LEN)?;
    let labels = label_block.chunks_exact(LABEL_LEN).map(ascii_field).collect();

    Ok(RecordingInfo {
        version: field(0, 8),
        patient: field(8, 88),
        recording: field(88, 168),
        start_date: field(168, 176),
        start_time: field(176, 184),
        header_bytes,
        reserved: field(192, 236),
        n_records,
        record_duration,
        labels,
    })
}

struct HeaderFields<'a> {
    path: &'a Path,
}

impl HeaderFields<'_> {
    fn number<T: std::str::FromStr>(&self, name: &'static str, raw: &str) -> Result<T, RecordingReadError> {
        raw.parse::<T>().map_err(|_| self.invalid(name, raw))
    }

    fn invalid(&self, name: &'static str, raw: &str) -> RecordingReadError {
        RecordingReadError::InvalidField {
            path: self.path.to_path_buf(),
            field: name,
            value: raw.to_string(),
        }
    }
}

fn read_block<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    path: &Path,
    needed: usize,
) -> Result<(), RecordingReadError> {
    reader.read_exact(buf).map_err(|source| {
        if source.kind() == std::io::ErrorKind::UnexpectedEof {
            RecordingReadError::Truncated { path: PathBuf::from(path), needed }
        } else {
            RecordingReadError::Open { path: PathBuf::from(path), source }
        }
    })
}

/// Space-padded ASCII → trimmed `String`. Non-ASCII bytes map as Latin-1.
fn ascii_field(raw: &[u8]) -> String {
    raw.iter().map(|&b| b as char).collect::<String>().trim().to_string()
}
