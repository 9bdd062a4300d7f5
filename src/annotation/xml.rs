//! XML scoring-document reader.
//!
//! Layout (NSRR / Compumedics export):
//!
//! ```text
//! <PSGAnnotation>
//!   <ScoredEvents>
//!     <ScoredEvent>
//!       <EventType>Stages|Stages</EventType>
//!       <EventConcept>Wake|0</EventConcept>
//!       <Start>0</Start>
//!       <Duration>30.0</Duration>
//!     </ScoredEvent>
//!     …
//! ```
//!
//! Every `ScoredEvent` below the root element is visited in document order,
//! whatever its nesting depth. Only the three child elements above are read;
//! any other children are ignored. Values are returned as text here and
//! converted to numbers by [`super::event`].
use std::borrow::Cow;

use crate::error::ParseError;

pub const SCORED_EVENT: &str = "ScoredEvent";
pub const EVENT_CONCEPT: &str = "EventConcept";
pub const START: &str = "Start";
pub const DURATION: &str = "Duration";

/// Text content of one `ScoredEvent` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScoredEvent {
    /// 0-based position among all `ScoredEvent` nodes.
    pub index: usize,
    pub concept: String,
    pub start: String,
    pub duration: String,
}

/// Decode raw document bytes to text.
///
/// The encoding comes from the XML declaration. UTF-8 is the default;
/// ISO-8859-1 and US-ASCII are decoded byte-by-byte as Latin-1.
/// A leading UTF-8 byte-order mark is skipped.
pub fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>, ParseError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match declared_encoding(bytes).map(|e| e.to_ascii_lowercase()) {
        Some(enc) if LATIN1_NAMES.contains(&enc.as_str()) => {
            Ok(Cow::Owned(bytes.iter().map(|&b| b as char).collect()))
        }
        Some(enc) if enc != "utf-8" && enc != "utf8" => {
            Err(ParseError::UnsupportedEncoding { encoding: enc })
        }
        _ => std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|e| ParseError::NotUtf8 { valid_up_to: e.valid_up_to() }),
    }
}

const LATIN1_NAMES: [&str; 8] = [
    "iso-8859-1", "iso8859-1", "iso_8859-1", "latin1", "latin-1", "l1", "us-ascii", "ascii",
];

/// Value of `encoding="…"` in a leading `<?xml … ?>` declaration.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    if !bytes.starts_with(b"<?xml") {
        return None;
    }
    let end = bytes.windows(2).position(|w| w == b"?>")?;
    let decl: String = bytes[..end].iter().map(|&b| b as char).collect();
    let rest = decl.split_once("encoding")?.1.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|&c| c == '"' || c == '\'')?;
    let value = rest[1..].split(quote).next()?;
    Some(value.trim().to_string())
}

/// Extract all `ScoredEvent` nodes from an XML document.
pub fn read_scored_events(text: &str) -> Result<Vec<RawScoredEvent>, ParseError> {
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();

    root.descendants()
        .filter(|n| *n != root && n.has_tag_name(SCORED_EVENT))
        .enumerate()
        .map(|(index, node)| {
            let field = |name: &'static str| -> Result<String, ParseError> {
                node.children()
                    .find(|c| c.has_tag_name(name))
                    .and_then(|c| c.text())
                    .map(str::to_string)
                    .ok_or(ParseError::MissingField { index, field: name })
            };
            Ok(RawScoredEvent {
                index,
                concept: field(EVENT_CONCEPT)?,
                start: field(START)?,
                duration: field(DURATION)?,
            })
        })
        .collect()
}
