//! docreg — Command-line interface for docreg-core
//!
//! Search the company documents register from the terminal. It supports
//! listing every record, free-text search, selecting a country the way a map
//! click does, resolving a country's flag code, and basic statistics.
//!
//! Usage examples
//! --------------
//!
//! - List everything
//!   $ docreg list
//!
//! - Search any column (case-insensitive substring)
//!   $ docreg search certificate
//!   $ docreg search 15
//!
//! - Select a country (exact display name becomes the search term)
//!   $ docreg country Brazil
//!
//! - Flag code for a name
//!   $ docreg resolve "United States of America"
//!
//! Data source
//! -----------
//!
//! By default the CLI reads `Company-Documents-Register.json` bundled with
//! `docreg-core`. Use `--input <path>` for another file (`.json` or
//! `.json.gz`). Set `RUST_LOG` or pass `-v` for diagnostics on stderr.
mod args;
mod render;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use docreg_core::api::PageView;
use docreg_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_dataset(args: &CliArgs) -> anyhow::Result<Dataset> {
    #[cfg(feature = "fetch")]
    if let Some(url) = &args.url {
        return Dataset::fetch(url)
            .map_err(|e| log_load_failure(url, e))
            .with_context(|| format!("Error fetching register from {url}"));
    }

    let path = args
        .input
        .as_ref()
        .map(std::path::PathBuf::from)
        .unwrap_or_else(Dataset::default_dataset_path);

    Dataset::load_from_path(&path)
        .map_err(|e| log_load_failure(path.display(), e))
        .with_context(|| format!("Error loading register from {}", path.display()))
}

fn log_load_failure(source: impl std::fmt::Display, err: DocRegError) -> DocRegError {
    tracing::error!(%source, error = %err, "failed to load register");
    err
}

fn print_page(state: &SearchState, with_banner: bool) {
    let page = PageView::from(state);
    if with_banner {
        println!("{}", render::banner(&page));
    }
    print!("{}", render::table(&page));
}

fn print_resolution(name: &str) {
    let code = resolve(name);
    match code.flag() {
        Some(flag) => println!("{name}: {code} {flag}"),
        None => println!("{name}: {code} (no flag)"),
    }
}

fn run(command: &Commands, state: &mut SearchState) {
    match command {
        Commands::List => print_page(state, true),

        Commands::Search { term } => {
            state.set_search_term(term.as_str());
            print_page(state, false);
        }

        Commands::Country { name } => {
            state.select_country(name.as_str());
            print_page(state, false);
        }

        Commands::Resolve { name } => print_resolution(name),

        Commands::Stats => {
            let stats = state.dataset().stats();
            println!("Register statistics:");
            println!("  Records: {}", stats.records);
            println!("  Countries: {}", stats.countries);
            match (stats.min_price, stats.max_price) {
                (Some(min), Some(max)) => {
                    println!("  Price range: {} - {}", Price::new(min), Price::new(max))
                }
                _ => println!("  Price range: n/a"),
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let mut state = SearchState::new();
    if args.command.needs_register() {
        state.load(load_dataset(&args)?);
    }
    run(&args.command, &mut state);

    Ok(())
}
