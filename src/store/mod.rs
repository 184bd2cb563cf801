//! Immutable in-memory index store and its label search.

use crate::record::IndexRecord;
use crate::types::{CompactString, RecordId};
use indexmap::IndexMap;

/// Immutable table of index records keyed by id.
///
/// Built once by [`crate::loader::Loader`] and read-only afterwards, so shared
/// references can serve concurrent readers without locking.
#[derive(Debug, Default)]
pub struct IndexStore {
    records: IndexMap<RecordId, IndexRecord>,
    /// (lowercased label, id), sorted once at build. Search walks this so
    /// result order never depends on insertion order.
    ordered: Vec<(CompactString, RecordId)>,
}

impl IndexStore {
    /// Merge blocks in order; a later block's record replaces an earlier one
    /// with the same id.
    pub(crate) fn from_blocks(blocks: Vec<Vec<IndexRecord>>) -> Self {
        let mut records = IndexMap::new();
        for block in blocks {
            for record in block {
                records.insert(record.id.clone(), record);
            }
        }

        let mut ordered: Vec<(CompactString, RecordId)> = records
            .values()
            .map(|record| (record.label.to_lowercase().into(), record.id.clone()))
            .collect();
        ordered.sort();

        Self { records, ordered }
    }

    /// All records whose label contains `query`, case-insensitively.
    ///
    /// The empty query matches nothing, following the convention that an
    /// unfocused search box shows nothing. Results are ordered by ascending
    /// lowercased label, ties broken by id. Never fails and never mutates;
    /// an unmatched query is simply an empty result.
    pub fn search(&self, query: &str) -> Vec<&IndexRecord> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.ordered
            .iter()
            .filter(|(label, _)| label.contains(&needle))
            .filter_map(|(_, id)| self.records.get(id))
            .collect()
    }

    /// Exact lookup by record id.
    pub fn get(&self, id: &str) -> Option<&IndexRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total link targets across all records.
    pub fn target_count(&self) -> usize {
        self.records.values().map(|r| r.targets.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexRecord> {
        self.records.values()
    }
}
