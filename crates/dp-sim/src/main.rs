// ABOUTME: Headless driver entry point.
// ABOUTME: Replays an event script against the layout controller and prints each layout as JSON.

mod runner;
mod scheduler;
mod script;

use std::path::Path;

use anyhow::{Context, Result};
use dp_core::LayoutConfig;
use script::Script;

const USAGE: &str = "usage: dualpane-sim <script.toml> [layout.toml]";

fn init_logging() {
    // stdout carries the JSON report
    let level = std::env::var("DUALPANE_LOG")
        .ok()
        .and_then(|value| value.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let script_path = args.next().context(USAGE)?;
    let config = match args.next() {
        Some(path) => LayoutConfig::load(Path::new(&path))
            .with_context(|| format!("Failed to load layout config {path}"))?,
        None => LayoutConfig::load_or_default(),
    };
    let script = Script::load(Path::new(&script_path))
        .with_context(|| format!("Failed to load script {script_path}"))?;

    tracing::info!(
        "Replaying {} events from {}",
        script.events.len(),
        script_path
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = tokio::task::LocalSet::new();
    let steps = local.block_on(&runtime, runner::run(&script, config))?;

    println!("{}", serde_json::to_string_pretty(&steps)?);
    Ok(())
}
