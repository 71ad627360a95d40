//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use crate::error::{describe_error_code, SyncError};
use tracing::error;

/// Exit status for an error that ends the run
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<SyncError>()
        .map(SyncError::exit_code)
        .unwrap_or(1)
}

/// Text printed to stderr for a fatal error
///
/// `SyncError`s show their user message, plus the error code and source
/// chain in verbose mode. Anything else is printed as-is.
pub fn fatal_report(error: &anyhow::Error, verbose: u8) -> String {
    let mut out = String::new();

    if let Some(sync_err) = error.downcast_ref::<SyncError>() {
        out.push_str(&format!("Error: {}", sync_err.user_message()));

        if verbose >= 1 {
            let code = sync_err.code();
            out.push_str(&format!(
                "\nError code: E{:04} ({})",
                code,
                describe_error_code(code)
            ));
            out.push_str(&format!(
                "\n\nContext Chain:\n{}",
                sync_err.developer_message()
            ));
        }
    } else {
        out.push_str(&format!("Error: {error}"));

        if verbose >= 1 {
            out.push_str("\n\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                out.push_str(&format!("\n  {}: {}", i, cause));
            }
        }
    }
    out
}

/// Handle fatal errors and exit with appropriate status code
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);
    eprintln!("{}", fatal_report(&error, verbose));
    std::process::exit(exit_code_for(&error))
}
