//! Display formatting for plans and tasks.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation results get newtype wrappers:
//!
//! - [`collections`]: [`PlanSummaries`] and unsaved [`Tasks`]
//! - [`results`]: [`CreateResult`] and [`DeleteResult`]
//! - [`datetime`]: [`LocalDateTime`] timestamp formatting
//!
//! All formatters produce markdown for the terminal renderer.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{PlanSummaries, Tasks};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult};
