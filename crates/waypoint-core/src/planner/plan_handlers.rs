//! Plan handler operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    display::PlanSummaries,
    engine::Goal,
    error::{PlannerError, Result},
    models::{Plan, Task},
    params::{GeneratePlan, Id},
};

impl Planner {
    /// Generates a plan for a goal and stores it.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the goal text is blank.
    /// Engine failures never surface here; only storage errors do.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use waypoint_core::{params::GeneratePlan, PlannerBuilder};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let plan = planner
    ///     .generate_plan(&GeneratePlan::new("Write a book"))
    ///     .await?;
    /// assert_eq!(plan.tasks.len(), 6);
    /// # Result::<(), waypoint_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<Plan> {
        let goal = Self::validated_goal(params)?;
        let tasks = self
            .orchestrator
            .generate(goal.text(), params.use_external)
            .await;

        let plan = self
            .store_plan(goal.text(), params.owner.as_deref(), tasks)
            .await?;
        info!("Stored plan {} with {} tasks", plan.id, plan.tasks.len());
        Ok(plan)
    }

    /// Generates the tasks for a goal without storing anything.
    pub async fn preview_plan(&self, params: &GeneratePlan) -> Result<Vec<Task>> {
        let goal = Self::validated_goal(params)?;
        Ok(self
            .orchestrator
            .generate(goal.text(), params.use_external)
            .await)
    }

    /// Lists stored plans as a displayable collection.
    pub async fn list_plans_summary(&self) -> Result<PlanSummaries> {
        Ok(PlanSummaries(self.list_plans().await?))
    }

    /// Deletes a plan, returning it as it was before deletion, or None if it
    /// does not exist.
    pub async fn delete_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let plan = self.get_plan(params).await?;
        if plan.is_some() {
            self.delete_plan_by_id(params).await?;
        }
        Ok(plan)
    }

    fn validated_goal(params: &GeneratePlan) -> Result<Goal> {
        let goal = Goal::new(&params.goal_text);
        if goal.is_empty() {
            return Err(PlannerError::invalid_input(
                "goal_text",
                "Goal text must not be empty",
            ));
        }
        Ok(goal)
    }
}
