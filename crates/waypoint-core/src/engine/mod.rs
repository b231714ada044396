//! Deterministic goal decomposition.
//!
//! The pipeline runs four pure steps over a trimmed goal and a reference
//! instant:
//!
//! ```text
//! goal ──▶ duration ──▶ phases ──▶ timeline ──▶ augment ──▶ Vec<Task>
//! ```
//!
//! - [`duration`]: infers the plan length in days from the goal text
//! - [`phases`]: picks 4 or 6 phases of the fixed template
//! - [`timeline`]: gives each phase an equal date window and a dependency
//! - [`augment`]: adds keyword-triggered tasks
//!
//! Nothing here fails, touches the network or keeps state between calls, so
//! the same goal and instant always give the same tasks.
//!
//! ```rust
//! use jiff::Timestamp;
//! use waypoint_core::engine::{decompose, Goal};
//!
//! let now: Timestamp = "2026-01-05T12:00:00Z".parse().unwrap();
//! let tasks = decompose(&Goal::new("Launch a product in 2 weeks"), now);
//! assert_eq!(tasks.len(), 6);
//! assert_eq!(tasks[0].start_date, "2026-01-05");
//! assert_eq!(tasks[1].depends_on, tasks[0].title);
//! ```

use jiff::{tz::TimeZone, Timestamp};
use log::debug;

use crate::models::Task;

pub mod augment;
pub mod duration;
pub mod phases;
pub mod timeline;

pub use duration::{parse_duration, Duration};
pub use phases::{select_phases, Phase, PHASES};
pub use timeline::{allocate, Timeline};

/// Goal text prepared for decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    text: String,
    normalized: String,
}

impl Goal {
    /// Trims the raw text and keeps a lower-cased copy for matching.
    pub fn new(raw: &str) -> Self {
        let text = raw.trim().to_string();
        let normalized = text.to_lowercase();
        Self { text, normalized }
    }

    /// The trimmed goal text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased goal text used for keyword and duration matching.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Runs the deterministic pipeline. Always returns at least four tasks.
pub fn decompose(goal: &Goal, now: Timestamp) -> Vec<Task> {
    let duration = parse_duration(goal.normalized(), now);
    let phases = select_phases(duration.days);
    let today = now.to_zoned(TimeZone::UTC).date();

    let Timeline {
        mut tasks,
        per_task_days,
    } = allocate(phases, duration.days, today);
    augment::augment(goal.normalized(), &mut tasks, phases, per_task_days, today);

    debug!(
        "Decomposed goal into {} tasks over {} days ({} per phase)",
        tasks.len(),
        duration.days,
        per_task_days
    );
    tasks
}
