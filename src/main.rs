//! Command-line entry point running the pattern walkthroughs.
//!
//! # Usage
//!
//! ```bash
//! # Run both walkthroughs
//! pattern-demos
//!
//! # Run a single walkthrough
//! pattern-demos decorator
//! pattern-demos observer
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Tracing filter directive (default: `warn`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text`)
//!
//! Diagnostic logs are written to stderr; the walkthrough transcript goes to
//! stdout.

use pattern_demos::config::{self, Config, LogFormat};
use pattern_demos::infrastructure::console::{Console, StdoutConsole};
use pattern_demos::scenarios::{Scenario, run_decorator_scenario, run_observer_scenario};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::rc::Rc;

/// Decorator and Observer pattern walkthroughs.
#[derive(Parser)]
#[command(name = "pattern-demos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Walkthrough to run
    #[arg(value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config)?;
    config.print_summary();

    let console: Rc<dyn Console> = Rc::new(StdoutConsole::new());

    if cli.scenario.includes_decorator() {
        println!("{}", "Decorator: mail pipeline".bright_blue().bold());
        run_decorator_scenario(console.clone());
    }

    if cli.scenario == Scenario::All {
        println!();
    }

    if cli.scenario.includes_observer() {
        println!("{}", "Observer: ticket sales".bright_blue().bold());
        run_observer_scenario(console);
    }

    Ok(())
}

/// Installs the global tracing subscriber, writing to stderr.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = config
        .env_filter()
        .context("Failed to build log filter")?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!(e))
    .context("Failed to initialize tracing")
}
