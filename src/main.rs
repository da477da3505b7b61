//! `splitboard-replay <script.json> [settings.json]`
//!
//! Replays a scripted pointer session against a fresh engine and prints the
//! final render snapshot as JSON on stdout. Without a settings argument the
//! default settings file is used if present.

use anyhow::{Context, Result, bail};
use splitboard::logging::init_logging;
use splitboard::perf::log_slow_handlers;
use splitboard::replay::{load_script, replay};
use splitboard::{BoxEngine, EngineSettings};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let Some(script_path) = args.next() else {
        bail!("usage: splitboard-replay <script.json> [settings.json]");
    };

    let settings = match args.next() {
        Some(path) => EngineSettings::load_from(&path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => EngineSettings::load(),
    };

    let events = load_script(&script_path)
        .with_context(|| format!("loading script {}", script_path.display()))?;
    info!(events = events.len(), script = %script_path.display(), "Replaying");

    let mut engine = BoxEngine::with_settings(settings);
    replay(&mut engine, &events);
    log_slow_handlers();

    let json = engine.snapshot().to_json().context("serializing snapshot")?;
    println!("{json}");
    Ok(())
}
