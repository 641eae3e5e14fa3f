//! Inspector Demo
//!
//! A small egui application that inspects sample targets: buttons for
//! zero-argument actions, foldout headers, and generic field editors.

mod app;
mod cli;
mod targets;

use anyhow::Result;
use clap::Parser;

use inspector_core::config;
use inspector_core::inspect::ExpansionStore;

use cli::Cli;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };

    let state_path = if cli.no_persist || !config.inspector.persist_expansion {
        None
    } else {
        config::expansion_state_path()
    };

    // A broken state file should not keep the demo from starting
    let store = match &state_path {
        Some(path) => ExpansionStore::load(path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring expansion state {}: {}", path.display(), e);
            ExpansionStore::new()
        }),
        None => ExpansionStore::new(),
    };
    tracing::info!("Loaded {} foldout states", store.len());

    app::run(app::App::new(config, store, state_path, cli.target))
}
