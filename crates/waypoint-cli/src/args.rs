use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DeletePlanArgs, GenerateArgs, ShowPlanArgs};

/// Turn free-form goals into dated, ordered task plans
///
/// Waypoint infers a duration from the goal text, lays a fixed delivery
/// lifecycle over it and stores the resulting plan. Set OPENAI_API_KEY and
/// pass --external to let a completion service draft the plan instead,
/// with the built-in plan as fallback.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true, env = "WAYPOINT_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a plan from a goal and store it
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Show a stored plan with its tasks
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// List stored plans
    #[command(alias = "ls")]
    List,
    /// Permanently delete a stored plan
    Delete(DeletePlanArgs),
}
