//! pathviz scenario driver.
//!
//! Reads a scenario file of edge insertions and search requests, runs
//! them against a session-owned graph, and animates UCS expansion traces
//! through the playback controller.

#[macro_use]
extern crate log;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::scenario::Scenario;
use crate::session::Session;

mod scenario;
mod session;

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let opts: Opts = Opts::parse();
    let scenario = Scenario::load(&opts.scenario)?;
    let mut session = Session::new(Duration::from_millis(opts.step_ms), !opts.no_animate);
    session.run(&scenario).await
}

/// Scenario-driven graph search explorer.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// Scenario file path
    scenario: PathBuf,

    /// Milliseconds between animated trace steps
    #[arg(long, default_value_t = 250)]
    step_ms: u64,

    /// Print UCS traces without animating them
    #[arg(long)]
    no_animate: bool,
}
