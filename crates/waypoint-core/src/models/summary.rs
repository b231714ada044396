//! Plan summary model for list views.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Plan;

/// Lightweight plan representation used when listing plans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    pub id: u64,
    pub goal_text: String,
    pub created_by: Option<String>,
    pub created_on: Timestamp,
    /// Number of tasks stored for the plan
    pub total_tasks: u32,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id,
            goal_text: plan.goal_text.clone(),
            created_by: plan.created_by.clone(),
            created_on: plan.created_on,
            total_tasks: plan.tasks.len() as u32,
        }
    }
}
