//! Runtime initialization and setup
//!
//! This module wires configuration into clients and runs the sync.

use crate::app::{config::AppConfig, logging::init_logging};
use crate::canvas::CanvasClient;
use crate::config::{load_course_mappings, EnvSettings};
use crate::error::AppResult;
use crate::notion::NotionClient;
use crate::sync::{SyncDriver, SyncReport};
use std::sync::Arc;
use tracing::{debug, error};

/// How a run ended without a fatal error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every course was processed
    Completed(SyncReport),
    /// The mapping file was absent; nothing was contacted
    MissingCourseFile,
}

/// Initialize the application with proper logging and configuration
pub fn initialize_app(config: &AppConfig) {
    init_logging(config);
}

/// Run the sync with settings from the process environment
pub async fn run(config: &AppConfig) -> AppResult<RunOutcome> {
    run_with_env(config, |key| std::env::var(key).ok()).await
}

/// Run the sync with settings from `lookup`
///
/// The mapping file is read before anything else. When it is missing the
/// run stops without contacting either service and, unless `strict` is set,
/// without an error.
pub async fn run_with_env<F>(config: &AppConfig, lookup: F) -> AppResult<RunOutcome>
where
    F: Fn(&str) -> Option<String>,
{
    let mappings = match load_course_mappings(&config.course_file).await {
        Ok(mappings) => mappings,
        Err(e) if e.is_config_not_found() && !config.strict => {
            error!("{}", e);
            eprintln!("Error: {} not found", config.course_file.display());
            return Ok(RunOutcome::MissingCourseFile);
        }
        Err(e) => return Err(e.into()),
    };

    let settings = EnvSettings::from_lookup(lookup)?;
    debug!("Using {:?}", settings.credentials);

    let driver = build_driver(config, &settings)?;
    let report = driver.run(&mappings).await?;
    Ok(RunOutcome::Completed(report))
}

/// Construct both clients and the driver for one run
pub fn build_driver(config: &AppConfig, settings: &EnvSettings) -> crate::error::Result<SyncDriver> {
    let canvas = CanvasClient::new(
        &settings.endpoints.canvas_url,
        settings.credentials.canvas_api_key.clone(),
        settings.endpoints.timeout,
    )?;
    let notion = NotionClient::new(
        &settings.endpoints.notion_url,
        settings.credentials.notion_api_key.clone(),
        settings.schema.clone(),
        settings.endpoints.timeout,
    )?
    .with_all_pages(config.all_pages);

    Ok(SyncDriver::new(
        Arc::new(canvas),
        Arc::new(notion),
        settings.credentials.notion_database_id.clone(),
        config.sync_options(),
    ))
}
