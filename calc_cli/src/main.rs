//! # Tally CLI Application
//!
//! Terminal calculator built on calc_core.
//!
//! With no arguments it starts an interactive Ratatui TUI. Passing `--keys`
//! or `--action` runs those inputs without a terminal UI and prints the
//! final display, which is handy for scripts:
//!
//! ```text
//! $ calc_cli --keys "5+3="
//! Display: 8
//! History:
//!   1. 5 + 3 = 8
//!
//! $ calc_cli --action number:9 --action memory-add --json
//! {"current":"9","previous":"","history":[],"memory":9.0,"has_memory":true,"status":"idle"}
//! ```

mod headless;
mod keys;
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use calc_core::{load_settings, save_settings, Action, CalculatorEngine, EngineSettings};

#[derive(Parser)]
#[command(author, version, about = "Tally terminal calculator", long_about = None)]
struct Cli {
    /// Settings file (JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the default settings to FILE and exit
    #[arg(long, value_name = "FILE")]
    init_config: Option<PathBuf>,

    /// Keys to run without the TUI, e.g. "12*3="
    #[arg(long)]
    keys: Option<String>,

    /// Action tag to dispatch after --keys, e.g. "number:5" or "memory-add" (repeatable)
    #[arg(long = "action", value_name = "TAG[:PAYLOAD]")]
    actions: Vec<Action>,

    /// Print the final display state as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    if let Some(path) = &cli.init_config {
        save_settings(&EngineSettings::default(), path)
            .with_context(|| format!("writing settings to {}", path.display()))?;
        println!("Wrote default settings to {}", path.display());
        return Ok(());
    }

    let settings = match &cli.config {
        Some(path) => load_settings(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => EngineSettings::default(),
    };
    let mut engine = CalculatorEngine::with_settings(settings);

    if cli.keys.is_none() && cli.actions.is_empty() && !cli.json {
        return tui::run(engine);
    }

    let mut actions = match &cli.keys {
        Some(script) => keys::parse_script(script)?,
        None => Vec::new(),
    };
    actions.extend(cli.actions.iter().copied());

    headless::run(&mut engine, &actions);

    let state = engine.display_state();
    if cli.json {
        println!("{}", serde_json::to_string(&state)?);
    } else {
        println!("{}", headless::render_report(&state));
    }
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
