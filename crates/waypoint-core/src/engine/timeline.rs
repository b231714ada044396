//! Even allocation of a duration across the chosen phases.

use jiff::{civil::Date, Span};

use super::phases::Phase;
use crate::models::Task;

/// Tasks laid out over the timeline, with the phase width used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub tasks: Vec<Task>,
    pub per_task_days: i64,
}

/// Width of each phase window in days.
///
/// Integer division: the windows can end up to `phases - 1` days short of
/// `days`. That shortfall is left as is.
pub fn per_task_days(days: i64, phases: usize) -> i64 {
    let phases = i64::try_from(phases.max(1)).unwrap_or(i64::MAX);
    (days / phases).max(1)
}

/// ISO date `offset` days after `today`.
pub(crate) fn day_offset(today: Date, offset: i64) -> String {
    Span::new()
        .try_days(offset)
        .and_then(|span| today.checked_add(span))
        .unwrap_or(Date::MAX)
        .to_string()
}

/// Lays the phases end to end starting on `today`.
///
/// Each task depends on the title of the phase before it in `phases`; the
/// first depends on nothing.
pub fn allocate(phases: &[Phase], days: i64, today: Date) -> Timeline {
    let width = per_task_days(days, phases.len());

    let tasks = phases
        .iter()
        .enumerate()
        .map(|(index, phase)| {
            let i = index as i64 + 1;
            let depends_on = match index {
                0 => "",
                _ => phases[index - 1].title,
            };
            Task::new(
                phase.title,
                phase.description,
                day_offset(today, (i - 1) * width),
                day_offset(today, i * width - 1),
                depends_on,
            )
        })
        .collect();

    Timeline {
        tasks,
        per_task_days: width,
    }
}
