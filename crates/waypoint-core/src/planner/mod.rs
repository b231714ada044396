//! High-level planner API for generating and storing plans.
//!
//! The [`Planner`] ties the decomposition engine to SQLite storage:
//!
//! ```text
//! GeneratePlan ──▶ PlanOrchestrator ──▶ Vec<Task> ──▶ Database ──▶ Plan
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_handlers`]: Goal validation, generation and display wrappers
//! - [`plan_ops`]: Database operations run on the blocking thread pool
//!
//! # Usage
//!
//! ```rust,no_run
//! use waypoint_core::{params::GeneratePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/waypoint.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .generate_plan(&GeneratePlan::new("Launch a product in 2 weeks"))
//!     .await?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::orchestrator::PlanOrchestrator;

pub mod builder;
pub mod plan_handlers;
pub mod plan_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for generating and managing plans.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) orchestrator: PlanOrchestrator,
}

impl Planner {
    /// Creates a new planner with the specified database path and engine.
    pub(crate) fn new(db_path: PathBuf, orchestrator: PlanOrchestrator) -> Self {
        Self {
            db_path,
            orchestrator,
        }
    }

    /// The engine used to generate plans.
    pub fn orchestrator(&self) -> &PlanOrchestrator {
        &self.orchestrator
    }
}
