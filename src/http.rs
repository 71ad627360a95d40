//! Shared HTTP plumbing for the Canvas and Notion clients

use crate::error::{ErrorCode, Result, SyncError};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Build a reqwest client with the run's timeout
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("assignment-sync/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            SyncError::Other {
                code: ErrorCode::OTHER_HTTP_CLIENT,
                message: "Failed to create HTTP client".to_string(),
                source: None,
            }
            .with_source(e)
        })
}

/// Parse a service base URL, forcing a trailing slash so relative joins
/// keep any path prefix
pub fn base_url(raw: &str) -> Result<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized).map_err(|e| {
        SyncError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("Invalid base URL '{}'", raw),
        )
        .with_source(e)
    })
}

/// Append path segments to a base URL
///
/// Each segment is percent-encoded on its own, so an id containing `/` or
/// `?` stays inside its segment. Empty, `.` and `..` segments are rejected.
pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    if let Some(bad) = segments
        .iter()
        .find(|s| s.is_empty() || **s == "." || **s == "..")
    {
        return Err(SyncError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("Invalid id '{}' in request path", bad),
        ));
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| {
            SyncError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("Base URL '{}' cannot take a path", base),
            )
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
