//! Command argument types and their handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, so `waypoint-core` stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use waypoint_core::{
    params::{GeneratePlan, Id},
    CreateResult, DeleteResult, Planner, Tasks,
};

use crate::renderer::TerminalRenderer;

/// Generate a plan from a goal
#[derive(Args)]
pub struct GenerateArgs {
    /// Goal text, e.g. "Launch a product in 2 weeks"
    #[arg(required = true, num_args = 1..)]
    pub goal: Vec<String>,
    /// Owner recorded with the stored plan
    #[arg(short, long)]
    pub owner: Option<String>,
    /// Ask the configured completion service to draft the plan first
    #[arg(short, long)]
    pub external: bool,
    /// Print the generated tasks without storing them
    #[arg(long)]
    pub dry_run: bool,
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<&GenerateArgs> for GeneratePlan {
    fn from(val: &GenerateArgs) -> Self {
        GeneratePlan {
            goal_text: val.goal.join(" "),
            owner: val.owner.clone(),
            use_external: val.external,
        }
    }
}

/// Show details of a specific plan
#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(help = "Unique identifier of the plan to show")]
    pub id: u64,
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<&ShowPlanArgs> for Id {
    fn from(val: &ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a plan
#[derive(Args)]
pub struct DeletePlanArgs {
    #[arg(help = "Unique identifier of the plan to delete")]
    pub id: u64,
}

impl From<DeletePlanArgs> for Id {
    fn from(val: DeletePlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Runs CLI commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn generate(&self, args: &GenerateArgs) -> Result<()> {
        let params = GeneratePlan::from(args);
        if params.use_external && !self.planner.orchestrator().has_service() {
            debug!("--external given but no completion service is configured");
        }

        if args.dry_run {
            let tasks = self
                .planner
                .preview_plan(&params)
                .await
                .context("Failed to generate plan")?;
            return if args.json {
                print_json(&tasks)
            } else {
                self.renderer.render(&Tasks(&tasks).to_string())
            };
        }

        let plan = self
            .planner
            .generate_plan(&params)
            .await
            .context("Failed to generate plan")?;
        if args.json {
            print_json(&plan)
        } else {
            self.renderer.render(&CreateResult::new(plan).to_string())
        }
    }

    pub async fn show(&self, args: &ShowPlanArgs) -> Result<()> {
        let plan = self
            .planner
            .get_plan(&Id::from(args))
            .await
            .context("Failed to load plan")?
            .with_context(|| format!("Plan with ID {} not found", args.id))?;

        if args.json {
            print_json(&plan)
        } else {
            self.renderer.render(&plan.to_string())
        }
    }

    pub async fn list(&self) -> Result<()> {
        let summaries = self
            .planner
            .list_plans_summary()
            .await
            .context("Failed to list plans")?;
        self.renderer.render(&summaries.to_string())
    }

    pub async fn delete(&self, args: DeletePlanArgs) -> Result<()> {
        let id = args.id;
        let plan = self
            .planner
            .delete_plan(&args.into())
            .await
            .context("Failed to delete plan")?
            .with_context(|| format!("Plan with ID {id} not found"))?;
        self.renderer.render(&DeleteResult::new(plan).to_string())
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{output}");
    Ok(())
}
