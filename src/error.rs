//! Error taxonomy for index loading.
//!
//! All variants are raised at load time and are fatal to that load attempt.
//! Queries against a built store cannot fail: an unmatched search is an empty
//! result, never an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no search data array found in '{source_name}'")]
    MissingArray { source_name: String },

    #[error("invalid search data in '{source_name}': {source}")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json5::Error,
    },

    #[error("malformed record at entry {position} in '{source_name}': {reason}")]
    MalformedRecord {
        source_name: String,
        /// 0-based position of the record within its block.
        position: usize,
        reason: String,
    },

    #[error("duplicate record id '{id}' in '{source_name}'")]
    DuplicateId { id: String, source_name: String },

    #[error("no index sources configured (set [index] sources in settings.toml or pass --source)")]
    NoSources,
}

pub type IndexResult<T> = Result<T, IndexError>;
