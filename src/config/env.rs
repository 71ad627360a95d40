//! Settings read from the process environment
//!
//! Everything is read once at startup into [`EnvSettings`] and handed to the
//! clients explicitly. Constructors take a lookup closure so tests can supply
//! variables without touching the real environment.

use crate::error::{common, ErrorCode, Result, SyncError};
use std::time::Duration;

pub const CANVAS_API_KEY: &str = "CANVAS_API_KEY";
pub const NOTION_API_KEY: &str = "NOTION_API_KEY";
pub const NOTION_DB_ID: &str = "NOTION_DB_ID";
pub const CANVAS_API_URL: &str = "CANVAS_API_URL";
pub const NOTION_API_URL: &str = "NOTION_API_URL";
pub const SYNC_HTTP_TIMEOUT_SECS: &str = "SYNC_HTTP_TIMEOUT_SECS";
pub const NOTION_TITLE_PROPERTY: &str = "NOTION_TITLE_PROPERTY";
pub const NOTION_RELATION_PROPERTY: &str = "NOTION_RELATION_PROPERTY";
pub const NOTION_DUE_PROPERTY: &str = "NOTION_DUE_PROPERTY";

pub const DEFAULT_CANVAS_URL: &str = "https://osu.instructure.com/";
pub const DEFAULT_NOTION_URL: &str = "https://api.notion.com";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// API secrets and the destination database
#[derive(Clone)]
pub struct Credentials {
    pub canvas_api_key: String,
    pub notion_api_key: String,
    pub notion_database_id: String,
}

// Keys stay out of debug logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("canvas_api_key", &"<redacted>")
            .field("notion_api_key", &"<redacted>")
            .field("notion_database_id", &self.notion_database_id)
            .finish()
    }
}

/// Base URLs and transport settings for both services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub canvas_url: String,
    pub notion_url: String,
    pub timeout: Duration,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            canvas_url: DEFAULT_CANVAS_URL.to_string(),
            notion_url: DEFAULT_NOTION_URL.to_string(),
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

/// Names of the destination database properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSchema {
    pub title_property: String,
    pub relation_property: String,
    pub due_property: String,
}

impl Default for StoreSchema {
    fn default() -> Self {
        Self {
            title_property: "Name".to_string(),
            relation_property: "Course".to_string(),
            due_property: "Due date".to_string(),
        }
    }
}

/// Everything the run needs from the environment
#[derive(Debug, Clone)]
pub struct EnvSettings {
    pub credentials: Credentials,
    pub endpoints: Endpoints,
    pub schema: StoreSchema,
}

impl EnvSettings {
    /// Read settings through an arbitrary lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| non_empty(key).ok_or_else(|| common::missing_env_var(key));

        let credentials = Credentials {
            canvas_api_key: required(CANVAS_API_KEY)?,
            notion_api_key: required(NOTION_API_KEY)?,
            notion_database_id: required(NOTION_DB_ID)?,
        };

        let mut endpoints = Endpoints::default();
        if let Some(url) = non_empty(CANVAS_API_URL) {
            endpoints.canvas_url = url;
        }
        if let Some(url) = non_empty(NOTION_API_URL) {
            endpoints.notion_url = url;
        }
        if let Some(secs) = non_empty(SYNC_HTTP_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                SyncError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    format!("{} must be a whole number of seconds", SYNC_HTTP_TIMEOUT_SECS),
                )
                .with_source(e)
            })?;
            endpoints.timeout = Duration::from_secs(secs);
        }

        let mut schema = StoreSchema::default();
        if let Some(name) = non_empty(NOTION_TITLE_PROPERTY) {
            schema.title_property = name;
        }
        if let Some(name) = non_empty(NOTION_RELATION_PROPERTY) {
            schema.relation_property = name;
        }
        if let Some(name) = non_empty(NOTION_DUE_PROPERTY) {
            schema.due_property = name;
        }

        Ok(Self {
            credentials,
            endpoints,
            schema,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        (CANVAS_API_KEY, "canvas-key"),
        (NOTION_API_KEY, "notion-key"),
        (NOTION_DB_ID, "db-123"),
    ];

    #[test]
    fn test_defaults_with_required_vars() {
        let settings = EnvSettings::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(settings.credentials.canvas_api_key, "canvas-key");
        assert_eq!(settings.credentials.notion_database_id, "db-123");
        assert_eq!(settings.endpoints, Endpoints::default());
        assert_eq!(settings.schema, StoreSchema::default());
    }

    #[test]
    fn test_missing_required_var() {
        let err = EnvSettings::from_lookup(lookup(&REQUIRED[..2])).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_MISSING_REQUIRED);
        assert!(err.to_string().contains(NOTION_DB_ID));
    }

    #[test]
    fn test_blank_required_var_counts_as_missing() {
        let mut vars = REQUIRED.to_vec();
        vars[0] = (CANVAS_API_KEY, "  ");
        let err = EnvSettings::from_lookup(lookup(&vars)).unwrap_err();
        assert!(err.to_string().contains(CANVAS_API_KEY));
    }

    #[test]
    fn test_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            (CANVAS_API_URL, "http://127.0.0.1:9000/"),
            (NOTION_API_URL, "http://127.0.0.1:9001"),
            (SYNC_HTTP_TIMEOUT_SECS, "5"),
            (NOTION_DUE_PROPERTY, "Deadline"),
        ]);
        let settings = EnvSettings::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(settings.endpoints.canvas_url, "http://127.0.0.1:9000/");
        assert_eq!(settings.endpoints.notion_url, "http://127.0.0.1:9001");
        assert_eq!(settings.endpoints.timeout, Duration::from_secs(5));
        assert_eq!(settings.schema.due_property, "Deadline");
        assert_eq!(settings.schema.title_property, "Name");
    }

    #[test]
    fn test_invalid_timeout() {
        let mut vars = REQUIRED.to_vec();
        vars.push((SYNC_HTTP_TIMEOUT_SECS, "soon"));
        let err = EnvSettings::from_lookup(lookup(&vars)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
    }

    #[test]
    fn test_debug_redacts_keys() {
        let settings = EnvSettings::from_lookup(lookup(&REQUIRED)).unwrap();
        let rendered = format!("{:?}", settings.credentials);
        assert!(!rendered.contains("canvas-key"));
        assert!(rendered.contains("db-123"));
    }
}
