//! Canvas REST client
//!
//! Uses the course and assignment endpoints of the Canvas LMS API v1.
//! Assignment lists are paginated through the `Link` response header.

use super::models::{Assignment, Course};
use crate::abstractions::AssignmentProvider;
use crate::error::{common, ErrorCode, ErrorExt, Result, SyncError};
use crate::http;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, LINK};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

const PAGE_SIZE: &str = "100";

/// Canvas API client authenticated with a bearer key
pub struct CanvasClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl CanvasClient {
    /// Create a client for the Canvas instance at `base_url`
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http::build_client(timeout)?,
            base_url: http::base_url(base_url)?,
            api_key: api_key.into(),
        })
    }

    async fn get(&self, url: Url, what: &str) -> Result<Response> {
        trace!("GET {}", url);
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .to_provider_error(format!("{} request failed", what))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(common::provider_status(status.as_u16(), what, &body));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            SyncError::provider_with_code(
                ErrorCode::PROVIDER_INVALID_RESPONSE,
                format!("Failed to parse {} response", what),
                None,
            )
            .with_source(e)
        })
    }
}

#[async_trait]
impl AssignmentProvider for CanvasClient {
    async fn get_course(&self, course_id: &str) -> Result<Course> {
        let what = format!("get course {}", course_id);
        let url = http::endpoint(&self.base_url, &["api", "v1", "courses", course_id])?;
        let response = self.get(url, &what).await?;
        Self::decode(response, &what).await
    }

    async fn list_assignments(&self, course_id: &str) -> Result<Vec<Assignment>> {
        let what = format!("list assignments for course {}", course_id);
        let mut url = http::endpoint(
            &self.base_url,
            &["api", "v1", "courses", course_id, "assignments"],
        )?;
        url.query_pairs_mut().append_pair("per_page", PAGE_SIZE);

        let mut assignments = Vec::new();
        let mut page = 1;
        loop {
            let response = self.get(url, &what).await?;
            let next = next_page(response.headers());
            let batch: Vec<Assignment> = Self::decode(response, &what).await?;
            debug!(
                "Course {}: page {} returned {} assignment(s)",
                course_id,
                page,
                batch.len()
            );
            assignments.extend(batch);

            match next {
                Some(next) => {
                    url = Url::parse(&next).map_err(|e| {
                        SyncError::provider_with_code(
                            ErrorCode::PROVIDER_INVALID_RESPONSE,
                            format!("Invalid next page link '{}'", next),
                            None,
                        )
                        .with_source(e)
                    })?;
                    page += 1;
                }
                None => break,
            }
        }
        Ok(assignments)
    }
}

/// The `rel="next"` target of a `Link` header, if any
pub(crate) fn next_page(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(LINK)?.to_str().ok()?;
    value.split(',').find_map(|link| {
        let mut parts = link.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|p| {
            let p = p.trim();
            p == "rel=\"next\"" || p == "rel=next"
        });
        is_next.then(|| {
            target
                .trim_start_matches('<')
                .trim_end_matches('>')
                .to_string()
        })
    })
}
