//! Application configuration
//!
//! This module holds the run settings chosen on the command line.

use crate::config::DEFAULT_COURSE_FILE;
use crate::sync::SyncOptions;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Course mapping file
    pub course_file: PathBuf,
    /// Compute and report without creating tasks
    pub dry_run: bool,
    /// Follow Notion query cursors past the first page
    pub all_pages: bool,
    /// Treat a missing mapping file and rejected title lookups as failures
    pub strict: bool,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    /// Set the course mapping file
    pub fn with_course_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.course_file = path.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_all_pages(mut self, all_pages: bool) -> Self {
        self.all_pages = all_pages;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Options handed to the sync driver
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            dry_run: self.dry_run,
            strict: self.strict,
        }
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            2 => "trace",
            _ => "trace,hyper=debug,reqwest=debug",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            course_file: PathBuf::from(DEFAULT_COURSE_FILE),
            dry_run: false,
            all_pages: false,
            strict: false,
        }
    }
}
