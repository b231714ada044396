//! Keyword-driven extra tasks.

use jiff::civil::Date;

use super::phases::Phase;
use super::timeline::day_offset;
use crate::models::Task;

pub const MARKETING_PREP_TITLE: &str = "Marketing prep";

const MARKETING_PREP_DESCRIPTION: &str =
    "Prepare assets, landing page, email sequences and socials.";

/// Inserts a "Marketing prep" task for goals about marketing a product.
///
/// The task is anchored to the first phase, like the second phase task, but
/// sits just before the last task, so two tasks share a dependency while
/// being far apart in the list.
pub fn augment(
    normalized_goal: &str,
    tasks: &mut Vec<Task>,
    phases: &[Phase],
    per_task_days: i64,
    today: Date,
) {
    if !(normalized_goal.contains("product") && normalized_goal.contains("marketing")) {
        return;
    }
    let Some(first) = phases.first() else {
        return;
    };

    let prep = Task::new(
        MARKETING_PREP_TITLE,
        MARKETING_PREP_DESCRIPTION,
        day_offset(today, per_task_days),
        day_offset(today, per_task_days.saturating_mul(2)),
        first.title,
    );
    let position = tasks.len().saturating_sub(1);
    tasks.insert(position, prep);
}
