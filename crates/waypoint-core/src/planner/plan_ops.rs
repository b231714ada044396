//! Plan storage operations for the Planner.

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::{Plan, PlanSummary, Task},
    params::Id,
};

impl Planner {
    /// Stores generated tasks as a new plan.
    pub async fn store_plan(
        &self,
        goal_text: &str,
        owner: Option<&str>,
        tasks: Vec<Task>,
    ) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let goal_text = goal_text.to_string();
        let owner = owner.map(String::from);

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_plan(&goal_text, owner.as_deref(), &tasks)
        })
        .await
        .map_err(PlannerError::join)?
    }

    /// Retrieves a plan by its ID, with its tasks.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(plan_id)
        })
        .await
        .map_err(PlannerError::join)?
    }

    /// Lists stored plans, newest first.
    pub async fn list_plans(&self) -> Result<Vec<PlanSummary>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans()
        })
        .await
        .map_err(PlannerError::join)?
    }

    /// Permanently deletes a plan and all its tasks.
    pub async fn delete_plan_by_id(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_plan(plan_id)
        })
        .await
        .map_err(PlannerError::join)?
    }
}
