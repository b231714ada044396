//! Core library for the Waypoint goal planner.
//!
//! Turns free-form goal text into an ordered list of dated tasks with
//! dependencies, and stores the generated plans in SQLite.
//!
//! # Architecture
//!
//! - [`engine`]: the deterministic pipeline (duration inference, phase
//!   selection, timeline allocation, keyword augmentation)
//! - [`bridge`]: the optional external completion service and reply parsing
//! - [`orchestrator`]: the entry point choosing between the two, with a
//!   fallback that always yields a plan
//! - [`planner`], [`db`]: validation and persistence of generated plans
//! - [`display`]: markdown formatting of plans and tasks
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{EngineConfig, PlanOrchestrator};
//!
//! # async fn example() {
//! let orchestrator = PlanOrchestrator::new(&EngineConfig::deterministic());
//! let tasks = orchestrator.generate("Launch a product in 2 weeks", false).await;
//! assert_eq!(tasks.len(), 6);
//! assert!(tasks[0].depends_on.is_empty());
//! # }
//! ```

pub mod bridge;
pub mod config;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use bridge::{CompletionService, OpenAiService, ReplyOutcome};
pub use config::{EngineConfig, ServiceConfig};
pub use db::Database;
pub use display::{CreateResult, DeleteResult, PlanSummaries, Tasks};
pub use engine::{decompose, Goal};
pub use error::{PlannerError, Result, ServiceError};
pub use models::{Plan, PlanSummary, StoredTask, Task};
pub use orchestrator::PlanOrchestrator;
pub use params::{GeneratePlan, Id};
pub use planner::{Planner, PlannerBuilder};
