//! Stored plan model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Task;

/// A generated plan as persisted, with its tasks in generation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Goal text the plan was generated from (trimmed)
    pub goal_text: String,

    /// Optional owner who requested the plan
    pub created_by: Option<String>,

    /// Timestamp when the plan was generated (UTC)
    pub created_on: Timestamp,

    /// Tasks in generation order
    #[serde(default)]
    pub tasks: Vec<StoredTask>,
}

/// A task row belonging to a stored plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredTask {
    /// Unique identifier for the task
    pub id: u64,

    /// ID of the parent plan
    pub plan_id: u64,

    /// Task fields as produced by the engine
    #[serde(flatten)]
    pub task: Task,
}
