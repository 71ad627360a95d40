//! Application module
//!
//! This module contains application-level functionality including:
//! - Configuration handling
//! - Logging setup
//! - Runtime wiring
//! - Fatal error reporting

pub mod config;
pub mod error_handling;
pub mod logging;
pub mod runtime;

// Re-export main application functions
pub use config::AppConfig;
pub use error_handling::{exit_code_for, fatal_report, handle_fatal_error};
pub use logging::init_logging;
pub use runtime::{build_driver, initialize_app, run, run_with_env, RunOutcome};
