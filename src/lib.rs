//! # assignment-sync
//!
//! Copies Canvas course assignments into a Notion task database, one task
//! per assignment, skipping assignments whose name is already a task title
//! under the course.
//!
//! ## Usage
//!
//! ```bash
//! assignment-sync [--config course_ids.json] [--dry-run] [--all-pages] [--strict]
//! ```
//!
//! ## Modules
//!
//! - `abstractions` - Trait seams for the assignment provider and task store, with mocks
//! - `app` - CLI-level configuration, logging and fatal error handling
//! - `canvas` - Canvas REST client and records
//! - `config` - Course mapping file and environment settings
//! - `error` - Unified error type with codes and exit statuses
//! - `http` - Shared reqwest client construction and URL handling
//! - `notion` - Notion REST client, task records and request bodies
//! - `sync` - The course-by-course sync driver
pub mod abstractions;
pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod http;
pub mod notion;
pub mod sync;
