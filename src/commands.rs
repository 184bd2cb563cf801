//! Command implementations using the Envelope schema for JSON output.

use crate::error::{IndexError, IndexResult};
use crate::io::{EntityType, Envelope, ExitCode, OutputFormat, ResultCode};
use crate::loader::{Loader, SourceSummary};
use crate::record::IndexRecord;
use crate::store::IndexStore;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// A loaded index together with its per-source record counts.
pub struct LoadedIndex {
    pub store: IndexStore,
    pub sources: Vec<SourceSummary>,
}

/// Load every source into one store.
pub fn load_index(sources: &[PathBuf]) -> IndexResult<LoadedIndex> {
    if sources.is_empty() {
        return Err(IndexError::NoSources);
    }

    let mut loader = Loader::new();
    for path in sources {
        loader.add_path(path)?;
    }
    let sources = loader.summaries().to_vec();
    Ok(LoadedIndex {
        store: loader.finish(),
        sources,
    })
}

/// `docdex search`: substring query over record labels.
pub fn search(store: &IndexStore, query: &str, limit: usize, format: OutputFormat) -> ExitCode {
    let started = Instant::now();
    let hits = store.search(query);
    let total = hits.len();
    let shown = if limit > 0 && total > limit {
        &hits[..limit]
    } else {
        &hits[..]
    };
    let truncated = shown.len() < total;
    let duration_ms = started.elapsed().as_millis() as u64;

    if total == 0 {
        return if format.is_json() {
            let envelope: Envelope<()> =
                Envelope::not_found(format!("No records match '{query}'"))
                    .with_entity_type(EntityType::SearchResult)
                    .with_query(query)
                    .with_duration_ms(duration_ms);
            emit(&envelope, ExitCode::NotFound)
        } else {
            println!("No records match '{query}'");
            ExitCode::NotFound
        };
    }

    if format.is_json() {
        let envelope = Envelope::success(shown)
            .with_entity_type(EntityType::SearchResult)
            .with_count(total)
            .with_query(query)
            .with_truncated(truncated)
            .with_duration_ms(duration_ms)
            .with_message(format!("Found {total} record(s)"));
        emit(&envelope, ExitCode::Success)
    } else {
        if truncated {
            println!(
                "Found {total} record(s) matching '{query}' (showing first {}):",
                shown.len()
            );
        } else {
            println!("Found {total} record(s) matching '{query}':");
        }
        for record in shown {
            print_record(record);
        }
        ExitCode::Success
    }
}

/// `docdex show`: exact record lookup by id.
pub fn show(store: &IndexStore, id: &str, format: OutputFormat) -> ExitCode {
    match store.get(id) {
        Some(record) => {
            if format.is_json() {
                let envelope = Envelope::success(record)
                    .with_entity_type(EntityType::Record)
                    .with_count(1);
                emit(&envelope, ExitCode::Success)
            } else {
                print_record(record);
                ExitCode::Success
            }
        }
        None => {
            if format.is_json() {
                let envelope: Envelope<()> =
                    Envelope::not_found(format!("No record with id '{id}'"))
                        .with_entity_type(EntityType::Record);
                emit(&envelope, ExitCode::NotFound)
            } else {
                eprintln!("Not found: '{id}'");
                ExitCode::NotFound
            }
        }
    }
}

/// Payload of `docdex stats`.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub records: usize,
    pub targets: usize,
    pub sources: Vec<SourceSummary>,
}

/// `docdex stats`: record and target counts for the loaded sources.
pub fn stats(loaded: &LoadedIndex, format: OutputFormat) -> ExitCode {
    let report = StatsReport {
        records: loaded.store.len(),
        targets: loaded.store.target_count(),
        sources: loaded.sources.clone(),
    };

    if format.is_json() {
        let envelope = Envelope::success(&report)
            .with_entity_type(EntityType::Stats)
            .with_count(report.records);
        emit(&envelope, ExitCode::Success)
    } else {
        println!(
            "Index: {} record(s), {} target(s), {} source(s)",
            report.records,
            report.targets,
            report.sources.len()
        );
        for source in &report.sources {
            println!("  {}: {} record(s)", source.source, source.records);
        }
        ExitCode::Success
    }
}

/// Report a load failure in the requested format.
pub fn report_error(err: &IndexError, format: OutputFormat) -> ExitCode {
    let code = ExitCode::from(err);
    if format.is_json() {
        let envelope: Envelope<()> =
            Envelope::error(ResultCode::from(err), code, err.to_string());
        emit(&envelope, code)
    } else {
        eprintln!("Error: {err}");
        code
    }
}

fn emit<T: Serialize>(envelope: &Envelope<T>, code: ExitCode) -> ExitCode {
    match envelope.to_json() {
        Ok(json) => {
            println!("{json}");
            code
        }
        Err(e) => {
            eprintln!("Error: failed to serialize output: {e}");
            ExitCode::GeneralError
        }
    }
}

fn print_record(record: &IndexRecord) {
    println!("  {}  [{}]", record.label, record.id);
    for target in &record.targets {
        if target.context.is_empty() {
            println!("    {}", target.locator);
        } else {
            println!("    {}  {}", target.locator, target.context);
        }
    }
}
