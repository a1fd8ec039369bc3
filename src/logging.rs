//! `tracing` subscriber setup.
//!
//! The terminal owns stdout and stderr while the game runs, so log output
//! only goes to a file. Without a path nothing is installed and the `tracing`
//! macros are no-ops. Levels come from `RUST_LOG`, defaulting to `info`.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Returns whether one was installed.
pub fn init(log_path: Option<&str>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = open_log(Path::new(path))?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    tracing::info!(path, "logging initialized");
    Ok(true)
}

fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))
}
