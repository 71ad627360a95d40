//! Synchronization of Canvas assignments into Notion tasks

pub mod driver;
pub mod report;

pub use driver::{missing_assignments, CoursePlan, PlannedWrite, SyncDriver, SyncOptions};
pub use report::{CourseReport, SyncReport};
