use serde::{Deserialize, Serialize};
use std::fmt;

/// Compact owned string for index data that never grows after load.
pub type CompactString = Box<str>;

pub fn compact_string(s: &str) -> CompactString {
    s.into()
}

/// Stable identifier of an index record, unique across the loaded index.
///
/// Ids come verbatim from the documentation generator (e.g. `read_754`) and
/// are treated as opaque: never decoded, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(CompactString);

impl RecordId {
    pub fn new(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self(value.into()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Allows map lookups keyed by RecordId to take a plain &str.
impl std::borrow::Borrow<str> for RecordId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
