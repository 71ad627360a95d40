//! Course mapping file
//!
//! The mapping file is a JSON array pairing each Canvas course id with the
//! id of the Notion page that represents the course:
//!
//! ```json
//! [
//!   { "canvas_id": "1001", "notion_relation_id": "rel-abc" }
//! ]
//! ```

use crate::error::{common, ErrorCode, Result, SyncError};
use serde::{Deserialize, Deserializer};
use std::path::Path;
use tracing::debug;

/// Default location of the mapping file, relative to the working directory
pub const DEFAULT_COURSE_FILE: &str = "course_ids.json";

/// One configured course pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseMapping {
    /// Canvas course id
    #[serde(rename = "canvas_id", deserialize_with = "string_or_number")]
    pub source_course_id: String,
    /// Notion page id the created tasks relate to
    #[serde(rename = "notion_relation_id")]
    pub destination_relation_id: String,
}

impl CourseMapping {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source_course_id: source.into(),
            destination_relation_id: destination.into(),
        }
    }
}

// Canvas ids are numeric, but hand-written files often quote them.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Parse mapping entries from JSON text
pub fn parse_course_mappings(content: &str) -> Result<Vec<CourseMapping>> {
    serde_json::from_str(content).map_err(|e| {
        SyncError::config_with_code(
            ErrorCode::CONFIG_INVALID_JSON,
            format!("Invalid course mapping entry: {}", e),
        )
        .with_source(e)
    })
}

/// Load the mapping file at `path`
///
/// A missing file yields a `CONFIG_NOT_FOUND` error so the caller can
/// report it before any remote call is made.
pub async fn load_course_mappings(path: &Path) -> Result<Vec<CourseMapping>> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(common::config_not_found(path));
        }
        Err(e) => {
            return Err(SyncError::config_with_code(
                ErrorCode::CONFIG_PATH_ERROR,
                "Could not read course mapping file",
            )
            .with_path(path)
            .with_source(e));
        }
    };

    let mappings = parse_course_mappings(&content).map_err(|e| e.with_path(path))?;
    debug!(
        "Loaded {} course mapping(s) from {}",
        mappings.len(),
        path.display()
    );
    Ok(mappings)
}
