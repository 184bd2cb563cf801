//! Parsing of one generator-emitted search data block.
//!
//! A block is a JavaScript fragment of the shape
//!
//! ```text
//! var searchData=
//! [
//!   ['read_754',['read',['../a.html#x',1,'ns::read()'],['../b.html#y',1,'ns::stream::read()']]],
//!   ['reset_755',['reset',['../a.html#z',1,'ns::reset']]]
//! ];
//! ```
//!
//! i.e. `record := [id, [label, target...]]` and
//! `target := [locator, kind, context]`, with single-quoted strings. The
//! array slice is JSON5, which is what `serde_json5` parses; the `var name=`
//! preamble and trailing `;` vary across generator versions and are ignored.
//! Some generator versions wrap the targets in one nested list
//! (`[label, [target...]]`) instead of appending them after the label; both
//! shapes are accepted.

use super::entities;
use crate::error::{IndexError, IndexResult};
use crate::record::{IndexRecord, Target};
use crate::types::RecordId;
use serde_json::Value;
use std::collections::HashSet;

/// Extract and validate every record of one block.
///
/// A duplicate id inside a single block is an error; cross-block precedence
/// is decided by the caller when blocks are merged.
pub(super) fn parse_block(source_name: &str, text: &str) -> IndexResult<Vec<IndexRecord>> {
    let array = slice_array(text).ok_or_else(|| IndexError::MissingArray {
        source_name: source_name.to_string(),
    })?;

    let value: Value = serde_json5::from_str(array).map_err(|e| IndexError::Parse {
        source_name: source_name.to_string(),
        source: e,
    })?;
    let raw = value.as_array().ok_or_else(|| IndexError::MalformedRecord {
        source_name: source_name.to_string(),
        position: 0,
        reason: "top level is not an array".to_string(),
    })?;

    let mut seen = HashSet::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());
    for (position, entry) in raw.iter().enumerate() {
        let record = convert(source_name, position, entry)?;
        if !seen.insert(record.id.clone()) {
            return Err(IndexError::DuplicateId {
                id: record.id.to_string(),
                source_name: source_name.to_string(),
            });
        }
        records.push(record);
    }
    Ok(records)
}

fn convert(source_name: &str, position: usize, entry: &Value) -> IndexResult<IndexRecord> {
    let malformed = |reason: String| IndexError::MalformedRecord {
        source_name: source_name.to_string(),
        position,
        reason,
    };

    let pair = entry
        .as_array()
        .ok_or_else(|| malformed("record is not an array".to_string()))?;
    let [id, payload] = pair.as_slice() else {
        return Err(malformed(format!(
            "expected [id, entry], got {} element(s)",
            pair.len()
        )));
    };

    let id = id
        .as_str()
        .ok_or_else(|| malformed("id is not a string".to_string()))?;
    let id = RecordId::new(id).ok_or_else(|| malformed("empty id".to_string()))?;

    let payload = payload
        .as_array()
        .ok_or_else(|| malformed("entry is not an array".to_string()))?;
    let (label, rest) = payload
        .split_first()
        .ok_or_else(|| malformed("empty entry".to_string()))?;
    let label = label
        .as_str()
        .ok_or_else(|| malformed("label is not a string".to_string()))?;
    if label.is_empty() {
        return Err(malformed("empty label".to_string()));
    }

    // Targets either follow the label directly or sit in one nested list,
    // depending on the generator version.
    let raw_targets: &[Value] = match rest {
        [Value::Array(inner)] if inner.first().is_none_or(Value::is_array) => inner,
        _ => rest,
    };
    if raw_targets.is_empty() {
        return Err(malformed("no targets".to_string()));
    }

    let mut targets = Vec::with_capacity(raw_targets.len());
    for (index, raw) in raw_targets.iter().enumerate() {
        targets.push(convert_target(raw, index, &malformed)?);
    }

    Ok(IndexRecord::new(id, &entities::unescape(label), targets))
}

fn convert_target(
    raw: &Value,
    index: usize,
    malformed: &impl Fn(String) -> IndexError,
) -> IndexResult<Target> {
    let parts = raw
        .as_array()
        .ok_or_else(|| malformed(format!("target {index} is not an array")))?;
    let [locator, kind, context] = parts.as_slice() else {
        return Err(malformed(format!(
            "target {index} is not [locator, kind, context]"
        )));
    };

    let locator = locator
        .as_str()
        .ok_or_else(|| malformed(format!("locator is not a string in target {index}")))?;
    if locator.is_empty() {
        return Err(malformed(format!("empty locator in target {index}")));
    }
    let kind = kind
        .as_u64()
        .and_then(|k| u32::try_from(k).ok())
        .ok_or_else(|| malformed(format!("kind is not a number in target {index}")))?;
    let context = context
        .as_str()
        .ok_or_else(|| malformed(format!("context is not a string in target {index}")))?;

    Ok(Target::new(locator, kind, &entities::unescape(context)))
}

/// The array is whatever sits between the first `[` and the last `]`.
fn slice_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
