//! Display implementations for domain models.
//!
//! All output is markdown, rendered by the CLI's terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Plan, PlanSummary, Task};

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.goal_text)?;
        writeln!(f)?;

        if let Some(owner) = &self.created_by {
            writeln!(f, "- Owner: {owner}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_on))?;

        if self.tasks.is_empty() {
            return writeln!(f, "\nNo tasks in this plan.");
        }

        writeln!(f, "\n## Tasks")?;
        writeln!(f)?;
        for (position, stored) in self.tasks.iter().enumerate() {
            writeln!(f, "### {}. {}", position + 1, stored.task.title)?;
            writeln!(f)?;
            stored.task.fmt_body(f)?;
        }
        Ok(())
    }
}

impl Task {
    /// Writes the task body under an already written heading.
    pub(crate) fn fmt_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **When**: {} → {}", self.start_date, self.end_date)?;
        if !self.depends_on.is_empty() {
            writeln!(f, "- **Depends on**: {}", self.depends_on)?;
        }
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        if let Some(note) = &self.llm_note {
            writeln!(f, "> Service note: {}", note.replace('\n', " "))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.title)?;
        writeln!(f)?;
        self.fmt_body(f)
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({} tasks)",
            self.goal_text, self.id, self.total_tasks
        )?;
        writeln!(f)?;

        if let Some(owner) = &self.created_by {
            writeln!(f, "- **Owner**: {owner}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_on))?;
        writeln!(f)?;

        Ok(())
    }
}
