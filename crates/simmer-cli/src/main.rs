//! Simmer CLI Application
//!
//! Command-line front end for guided cooking, voice commands and receipt
//! scans.

mod args;
mod cli;
mod kitchen;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use simmer_core::SettingsBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        tick_millis,
        command,
    } = Args::parse();

    let settings = SettingsBuilder::new()
        .with_config_path(config)
        .with_tick_millis(tick_millis)
        .build()
        .context("Failed to load settings")?;

    let cli = Cli::new(settings, TerminalRenderer::new(!no_color));

    info!("Simmer started");

    match command {
        Show(args) => cli.show(args),
        Cook(args) => cli.cook(args).await,
        Timer(args) => cli.timer(args).await,
        Voice(args) => cli.voice(args),
        Receipt(args) => cli.receipt(args),
    }
}
