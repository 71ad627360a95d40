//! Notion REST client
//!
//! Talks to the database query and page creation endpoints with a bearer
//! key and a pinned API version header.

use super::models::{NewTask, QueryResponse, TitleLookup};
use super::properties;
use crate::abstractions::TaskStore;
use crate::config::StoreSchema;
use crate::error::{common, ErrorCode, ErrorExt, Result, SyncError};
use crate::http;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

/// API version sent with every request
pub const NOTION_VERSION: &str = "2022-06-28";

/// Notion API client for one integration key
pub struct NotionClient {
    client: Client,
    base_url: Url,
    api_key: String,
    schema: StoreSchema,
    all_pages: bool,
}

impl NotionClient {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        schema: StoreSchema,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: http::build_client(timeout)?,
            base_url: http::base_url(base_url)?,
            api_key: api_key.into(),
            schema,
            all_pages: false,
        })
    }

    /// Follow query cursors instead of stopping after the first page
    pub fn with_all_pages(mut self, all_pages: bool) -> Self {
        self.all_pages = all_pages;
        self
    }

    async fn post(&self, url: Url, body: &Value, what: &str) -> Result<Response> {
        trace!("POST {} {}", url, body);
        self.client
            .post(url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(body)
            .send()
            .await
            .to_store_error(format!("{} request failed", what))
    }
}

#[async_trait]
impl TaskStore for NotionClient {
    async fn query_titles(&self, database_id: &str, relation_id: &str) -> Result<TitleLookup> {
        let url = http::endpoint(&self.base_url, &["v1", "databases", database_id, "query"])?;

        let mut titles = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let body = properties::query_body(&self.schema, relation_id, cursor.as_deref());
            let response = self.post(url.clone(), &body, "query database").await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Ok(TitleLookup::Rejected {
                    status: status.as_u16(),
                    body,
                });
            }

            let page: QueryResponse = response.json().await.map_err(|e| {
                SyncError::store_with_code(
                    ErrorCode::STORE_INVALID_RESPONSE,
                    "Failed to parse database query response",
                    Some(status.as_u16()),
                )
                .with_source(e)
            })?;
            titles.extend(properties::extract_titles(
                &page.results,
                &self.schema.title_property,
            ));

            match page.next_cursor {
                Some(next) if page.has_more && self.all_pages => cursor = Some(next),
                _ => {
                    if page.has_more && !self.all_pages {
                        debug!(
                            "Relation {} has more than one page of tasks; only the first was read",
                            relation_id
                        );
                    }
                    break;
                }
            }
        }
        Ok(TitleLookup::Found(titles))
    }

    async fn create_task(&self, database_id: &str, task: &NewTask) -> Result<()> {
        let url = http::endpoint(&self.base_url, &["v1", "pages"])?;
        let body = properties::page_body(database_id, &self.schema, task);
        let response = self.post(url, &body, "create page").await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(common::store_status(
                ErrorCode::STORE_CREATE_FAILED,
                status.as_u16(),
                &format!("create page '{}'", task.title),
                &body,
            ));
        }
        Ok(())
    }
}
