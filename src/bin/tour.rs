//! Prints the guided tour of the crate's functions.
//!
//! Run with: cargo run --bin tour -- --help

use clap::{ArgAction, Parser};
use closure_combinators::config::TourConfig;
use closure_combinators::tour::{Section, Tour};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Walk through recursion, closures, higher-order functions and shared state.
#[derive(Parser, Debug)]
#[command(name = "tour", version)]
struct Cli {
    /// TOML file with tour inputs.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only show this section (repeatable). Overrides the config list.
    #[arg(short, long = "section", value_name = "NAME")]
    sections: Vec<Section>,

    /// Disable coloured headings.
    #[arg(long)]
    no_color: bool,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "parsed arguments");

    let mut config = match &cli.config {
        Some(path) => TourConfig::load(path)?,
        None => TourConfig::default(),
    };
    if cli.no_color {
        config.color = false;
        colored::control::set_override(false);
    }

    let mut tour = Tour::new(config)?;
    if !cli.sections.is_empty() {
        tour = tour.with_sections(cli.sections);
    }
    info!(sections = tour.sections().len(), "starting tour");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    tour.run(&mut out)?;
    out.flush()?;
    Ok(())
}
