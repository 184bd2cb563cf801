use clap::Parser;
use docdex::cli::{Cli, Commands};
use docdex::commands;
use docdex::config::Settings;
use docdex::io::{ExitCode, OutputFormat};
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        Settings::default()
    });

    docdex::logging::init_with_config(&settings.logging);

    // Running without a settings file is fine (sources can come from the
    // command line); note it for anyone debugging config resolution.
    if cli.config.is_none() && !matches!(cli.command, Commands::Init { .. }) {
        if let Err(warning) = Settings::check_init() {
            tracing::debug!("{warning}");
        }
    }

    let code = run(cli, settings);
    process::exit(i32::from(code.code()));
}

fn run(cli: Cli, settings: Settings) -> ExitCode {
    match cli.command {
        Commands::Init { force } => init(force),

        Commands::Config => match toml::to_string_pretty(&settings) {
            Ok(toml_str) => {
                println!("{toml_str}");
                ExitCode::Success
            }
            Err(e) => {
                eprintln!("Error displaying config: {e}");
                ExitCode::GeneralError
            }
        },

        Commands::Search {
            query,
            limit,
            source,
            json,
        } => {
            let format = OutputFormat::from_json_flag(json);
            let sources = pick_sources(source, &settings);
            match commands::load_index(&sources) {
                Ok(loaded) => commands::search(
                    &loaded.store,
                    &query,
                    limit.unwrap_or(settings.search.limit),
                    format,
                ),
                Err(e) => commands::report_error(&e, format),
            }
        }

        Commands::Show { id, source, json } => {
            let format = OutputFormat::from_json_flag(json);
            let sources = pick_sources(source, &settings);
            match commands::load_index(&sources) {
                Ok(loaded) => commands::show(&loaded.store, &id, format),
                Err(e) => commands::report_error(&e, format),
            }
        }

        Commands::Stats { source, json } => {
            let format = OutputFormat::from_json_flag(json);
            let sources = pick_sources(source, &settings);
            match commands::load_index(&sources) {
                Ok(loaded) => commands::stats(&loaded, format),
                Err(e) => commands::report_error(&e, format),
            }
        }
    }
}

fn init(force: bool) -> ExitCode {
    match Settings::init_config_file(force) {
        Ok(path) => {
            println!("Created configuration file at: {}", path.display());
            println!("Edit this file to customize your settings.");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::GeneralError
        }
    }
}

/// CLI sources win outright; configured sources resolve against the
/// workspace root when relative.
fn pick_sources(cli_sources: Vec<PathBuf>, settings: &Settings) -> Vec<PathBuf> {
    if !cli_sources.is_empty() {
        return cli_sources;
    }

    settings
        .index
        .sources
        .iter()
        .map(|path| match (&settings.workspace_root, path.is_absolute()) {
            (Some(root), false) => root.join(path),
            _ => path.clone(),
        })
        .collect()
}
