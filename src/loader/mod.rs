//! Loading of search index blocks into an [`IndexStore`].
//!
//! Records are produced entirely by an external documentation generator and
//! loaded wholesale at startup; nothing here mutates them afterwards.

mod block;
mod entities;

use crate::error::{IndexError, IndexResult};
use crate::record::IndexRecord;
use crate::store::IndexStore;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Record count for one loaded source.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub source: String,
    pub records: usize,
}

/// Accumulates parsed blocks and merges them into an [`IndexStore`].
///
/// Blocks merge in the order they were added. When the same record id appears
/// in different blocks the latest-added block wins: generators rewrite whole
/// blocks on regeneration, so the newest occurrence is the authoritative
/// revision. A duplicate id inside a single block is a [`IndexError::DuplicateId`].
#[derive(Default)]
pub struct Loader {
    blocks: Vec<Vec<IndexRecord>>,
    summaries: Vec<SourceSummary>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block file, or every `*.js` block inside a directory.
    ///
    /// Directory entries load in sorted file-name order, matching the way
    /// generators shard their index (`all_0.js`, `all_1.js`, ...).
    pub fn add_path(&mut self, path: &Path) -> IndexResult<()> {
        let io_err = |source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        };

        if fs::metadata(path).map_err(io_err)?.is_dir() {
            let mut files: Vec<_> = fs::read_dir(path)
                .map_err(io_err)?
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "js"))
                .collect();
            files.sort();
            for file in &files {
                self.add_file(file)?;
            }
            Ok(())
        } else {
            self.add_file(path)
        }
    }

    fn add_file(&mut self, path: &Path) -> IndexResult<()> {
        let text = fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_str(&path.display().to_string(), &text)
    }

    /// Add a block from already-read text. `source_name` labels any errors.
    pub fn add_str(&mut self, source_name: &str, text: &str) -> IndexResult<()> {
        let records = block::parse_block(source_name, text)?;
        debug!("parsed {} records from '{source_name}'", records.len());
        self.summaries.push(SourceSummary {
            source: source_name.to_string(),
            records: records.len(),
        });
        self.blocks.push(records);
        Ok(())
    }

    /// Per-source record counts, in the order sources were added.
    pub fn summaries(&self) -> &[SourceSummary] {
        &self.summaries
    }

    /// Merge all added blocks into an immutable store.
    pub fn finish(self) -> IndexStore {
        let sources = self.summaries.len();
        let store = IndexStore::from_blocks(self.blocks);
        info!("index loaded: {} records from {sources} source(s)", store.len());
        store
    }
}
