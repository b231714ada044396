//! Waypoint CLI Application
//!
//! Command-line interface for the Waypoint goal planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use waypoint_core::{EngineConfig, PlannerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let engine_config = EngineConfig::from_env();
    info!(
        "Waypoint started (completion service {})",
        if engine_config.has_service() {
            "configured"
        } else {
            "not configured"
        }
    );

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .with_engine_config(engine_config)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let cli = Cli::new(planner, TerminalRenderer::new(!no_color));

    match command {
        Some(Generate(args)) => cli.generate(&args).await,
        Some(Show(args)) => cli.show(&args).await,
        Some(List) | None => cli.list().await,
        Some(Delete(args)) => cli.delete(args).await,
    }
}
