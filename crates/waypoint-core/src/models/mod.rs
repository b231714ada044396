//! Data models for tasks and stored plans.
//!
//! [`Task`] is the record the engine produces and the external bridge parses.
//! [`Plan`] and [`StoredTask`] add the identity assigned by storage, and
//! [`PlanSummary`] is the compact form used by list views. Display
//! implementations live in [`crate::display::models`].

pub mod plan;
pub mod summary;
pub mod task;

pub use plan::{Plan, StoredTask};
pub use summary::PlanSummary;
pub use task::Task;
