//! Task records and query results on the Notion side

use crate::canvas::Assignment;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A task page to be created in the destination database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Page title, the assignment name
    pub title: String,
    /// Link embedded in the title text
    pub title_url: String,
    /// Notion page id of the course
    pub course_relation: String,
    pub due: Option<DateTime<Utc>>,
}

impl NewTask {
    pub fn for_assignment(assignment: &Assignment, course_relation: &str) -> Self {
        Self {
            title: assignment.name.clone(),
            title_url: assignment.html_url.clone(),
            course_relation: course_relation.to_string(),
            due: assignment.due_at,
        }
    }
}

/// Outcome of the existing-titles query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleLookup {
    /// Titles filed under the course, in result order, duplicates kept
    Found(Vec<String>),
    /// The store answered with a non-success status
    Rejected { status: u16, body: String },
}

impl TitleLookup {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// One page of a database query
#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}
