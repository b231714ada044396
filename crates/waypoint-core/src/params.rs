//! Parameter structures for Waypoint operations
//!
//! Shared parameter structures used by every interface (CLI today) without
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these:
//!
//! ```text
//! CLI Args (clap) ──▶ Core Params ──▶ Planner
//! ```

use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_plan and delete_plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for generating a plan from a goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratePlan {
    /// Free-form goal text (required, non-empty after trimming)
    pub goal_text: String,
    /// Optional owner recorded with the stored plan
    pub owner: Option<String>,
    /// Ask the external completion service first when one is configured
    #[serde(default)]
    pub use_external: bool,
}

impl GeneratePlan {
    /// Deterministic generation parameters for a goal.
    pub fn new(goal_text: impl Into<String>) -> Self {
        Self {
            goal_text: goal_text.into(),
            ..Default::default()
        }
    }
}
