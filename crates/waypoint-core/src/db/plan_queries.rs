//! Plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{Plan, PlanSummary, Task},
};

const INSERT_PLAN_SQL: &str =
    "INSERT INTO plans (goal_text, created_by, created_on) VALUES (?1, ?2, ?3)";
const SELECT_PLAN_SQL: &str =
    "SELECT id, goal_text, created_by, created_on FROM plans WHERE id = ?1";
const SELECT_SUMMARIES_SQL: &str = "SELECT id, goal_text, created_by, created_on, total_tasks \
     FROM plan_summaries ORDER BY id DESC";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

/// Parses a stored RFC 3339 timestamp column.
fn timestamp_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Stores a generated plan and its tasks in one transaction.
    pub fn create_plan(
        &mut self,
        goal_text: &str,
        created_by: Option<&str>,
        tasks: &[Task],
    ) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(INSERT_PLAN_SQL, params![goal_text, created_by, now.to_string()])
            .db_context("Failed to insert plan")?;
        let id = tx.last_insert_rowid() as u64;

        let tasks = Self::insert_tasks(&tx, id, tasks)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plan {
            id,
            goal_text: goal_text.to_string(),
            created_by: created_by.map(String::from),
            created_on: now,
            tasks,
        })
    }

    /// Retrieves a plan by its ID with its tasks in generation order.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let mut plan = self
            .connection
            .query_row(SELECT_PLAN_SQL, params![id as i64], |row| {
                Ok(Plan {
                    id: row.get::<_, i64>(0)? as u64,
                    goal_text: row.get(1)?,
                    created_by: row.get(2)?,
                    created_on: timestamp_column(row, 3)?,
                    tasks: Vec::new(),
                })
            })
            .optional()
            .db_context("Failed to query plan")?;

        if let Some(ref mut plan) = plan {
            plan.tasks = self.get_tasks(plan.id)?;
        }

        Ok(plan)
    }

    /// Lists plan summaries, newest first.
    pub fn list_plans(&self) -> Result<Vec<PlanSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(PlanSummary {
                    id: row.get::<_, i64>(0)? as u64,
                    goal_text: row.get(1)?,
                    created_by: row.get(2)?,
                    created_on: timestamp_column(row, 3)?,
                    total_tasks: row.get::<_, i64>(4)? as u32,
                })
            })
            .db_context("Failed to query plan summaries")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan summaries")?;

        Ok(summaries)
    }

    /// Permanently deletes a plan and its tasks.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_PLAN_SQL, params![id as i64])
            .db_context("Failed to delete plan")?;

        if deleted == 0 {
            return Err(PlannerError::PlanNotFound { id });
        }
        Ok(())
    }
}
