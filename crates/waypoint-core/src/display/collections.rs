//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{PlanSummary, Task};

/// Newtype wrapper for displaying collections of plan summaries.
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying an unsaved, generated task list.
pub struct Tasks<'a>(pub &'a [Task]);

impl fmt::Display for Tasks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan preview")?;
        writeln!(f)?;
        for (position, task) in self.0.iter().enumerate() {
            writeln!(f, "### {}. {}", position + 1, task.title)?;
            writeln!(f)?;
            task.fmt_body(f)?;
        }
        Ok(())
    }
}
