//! Task storage for plans.

use rusqlite::{params, Connection};

use super::UNTITLED_TASK;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{StoredTask, Task},
};

const INSERT_TASK_SQL: &str = "INSERT INTO tasks \
     (plan_id, position, title, description, start_date, end_date, depends_on, llm_note) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_TASKS_SQL: &str = "SELECT id, plan_id, title, description, start_date, end_date, \
     depends_on, llm_note FROM tasks WHERE plan_id = ?1 ORDER BY position";

impl super::Database {
    /// Inserts tasks for a plan, keeping their order.
    pub(super) fn insert_tasks(
        conn: &Connection,
        plan_id: u64,
        tasks: &[Task],
    ) -> Result<Vec<StoredTask>> {
        let mut stmt = conn
            .prepare(INSERT_TASK_SQL)
            .db_context("Failed to prepare task insert")?;

        let mut stored = Vec::with_capacity(tasks.len());
        for (position, task) in tasks.iter().enumerate() {
            let mut task = task.clone();
            if task.title.trim().is_empty() {
                task.title = UNTITLED_TASK.to_string();
            }

            stmt.execute(params![
                plan_id as i64,
                position as i64,
                task.title,
                task.description,
                task.start_date,
                task.end_date,
                task.depends_on,
                task.llm_note,
            ])
            .db_context("Failed to insert task")?;

            stored.push(StoredTask {
                id: conn.last_insert_rowid() as u64,
                plan_id,
                task,
            });
        }

        Ok(stored)
    }

    /// Retrieves the tasks of a plan in generation order.
    pub fn get_tasks(&self, plan_id: u64) -> Result<Vec<StoredTask>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASKS_SQL)
            .db_context("Failed to prepare query")?;

        let tasks = stmt
            .query_map(params![plan_id as i64], |row| {
                Ok(StoredTask {
                    id: row.get::<_, i64>(0)? as u64,
                    plan_id: row.get::<_, i64>(1)? as u64,
                    task: Task {
                        title: row.get(2)?,
                        description: row.get(3)?,
                        start_date: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                        end_date: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                        depends_on: row.get(6)?,
                        llm_note: row.get(7)?,
                    },
                })
            })
            .db_context("Failed to query tasks")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read tasks")?;

        Ok(tasks)
    }
}
