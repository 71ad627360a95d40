//! Task store abstraction
//!
//! Covers the two operations the sync needs from the destination database:
//! a filtered title query and page creation.

use crate::error::{common, ErrorCode, Result};
use crate::notion::{NewTask, TitleLookup};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Destination database of task records
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Titles of the records whose course relation contains `relation_id`
    ///
    /// A non-success response is reported as [`TitleLookup::Rejected`], not
    /// as an error; transport failures are errors.
    async fn query_titles(&self, database_id: &str, relation_id: &str) -> Result<TitleLookup>;

    /// Create one task record
    async fn create_task(&self, database_id: &str, task: &NewTask) -> Result<()>;
}

/// Calls recorded by [`MockTaskStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    QueryTitles {
        database_id: String,
        relation_id: String,
    },
    CreateTask {
        database_id: String,
        task: NewTask,
    },
}

/// In-memory `TaskStore` for testing
///
/// Created tasks become visible to later title queries for the same
/// relation, so repeated runs behave like a real database.
#[derive(Clone, Default)]
pub struct MockTaskStore {
    seeded: HashMap<String, Vec<String>>,
    written: Arc<Mutex<Vec<NewTask>>>,
    rejections: HashMap<String, (u16, String)>,
    create_failure: Option<u16>,
    /// Track calls for verification
    pub calls: Arc<Mutex<Vec<StoreCall>>>,
}

impl MockTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed existing titles under a relation
    pub fn with_titles(mut self, relation_id: &str, titles: &[&str]) -> Self {
        self.seeded.insert(
            relation_id.to_string(),
            titles.iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    /// Answer title queries for `relation_id` with a non-success status
    pub fn with_rejected_lookup(mut self, relation_id: &str, status: u16, body: &str) -> Self {
        self.rejections
            .insert(relation_id.to_string(), (status, body.to_string()));
        self
    }

    /// Fail every create call with `status`
    pub fn with_create_failure(mut self, status: u16) -> Self {
        self.create_failure = Some(status);
        self
    }

    pub async fn get_calls(&self) -> Vec<StoreCall> {
        self.calls.lock().await.clone()
    }

    /// Tasks that were written successfully, in call order
    pub async fn created_tasks(&self) -> Vec<NewTask> {
        self.written.lock().await.clone()
    }

    /// Number of `create_task` calls, including failed ones
    pub async fn create_attempts(&self) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|call| matches!(call, StoreCall::CreateTask { .. }))
            .count()
    }
}

#[async_trait]
impl TaskStore for MockTaskStore {
    async fn query_titles(&self, database_id: &str, relation_id: &str) -> Result<TitleLookup> {
        self.calls.lock().await.push(StoreCall::QueryTitles {
            database_id: database_id.to_string(),
            relation_id: relation_id.to_string(),
        });

        if let Some((status, body)) = self.rejections.get(relation_id) {
            return Ok(TitleLookup::Rejected {
                status: *status,
                body: body.clone(),
            });
        }
        let mut titles = self.seeded.get(relation_id).cloned().unwrap_or_default();
        titles.extend(
            self.written
                .lock()
                .await
                .iter()
                .filter(|task| task.course_relation == relation_id)
                .map(|task| task.title.clone()),
        );
        Ok(TitleLookup::Found(titles))
    }

    async fn create_task(&self, database_id: &str, task: &NewTask) -> Result<()> {
        self.calls.lock().await.push(StoreCall::CreateTask {
            database_id: database_id.to_string(),
            task: task.clone(),
        });

        if let Some(status) = self.create_failure {
            return Err(common::store_status(
                ErrorCode::STORE_CREATE_FAILED,
                status,
                "create page",
                "mock failure",
            ));
        }
        self.written.lock().await.push(task.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            title_url: format!("https://canvas.test/{}", title),
            course_relation: "rel-abc".to_string(),
            due: None,
        }
    }

    #[tokio::test]
    async fn test_seeded_titles() {
        let store = MockTaskStore::new().with_titles("rel-abc", &["HW1", "HW1"]);
        let lookup = store.query_titles("db", "rel-abc").await.unwrap();
        assert_eq!(
            lookup,
            TitleLookup::Found(vec!["HW1".to_string(), "HW1".to_string()])
        );
    }

    #[tokio::test]
    async fn test_created_tasks_become_visible() {
        let store = MockTaskStore::new();
        store.create_task("db", &task("HW2")).await.unwrap();

        let lookup = store.query_titles("db", "rel-abc").await.unwrap();
        assert_eq!(lookup, TitleLookup::Found(vec!["HW2".to_string()]));
        assert_eq!(store.created_tasks().await, vec![task("HW2")]);
    }

    #[tokio::test]
    async fn test_rejected_lookup() {
        let store = MockTaskStore::new().with_rejected_lookup("rel-abc", 500, "boom");
        let lookup = store.query_titles("db", "rel-abc").await.unwrap();
        assert!(lookup.is_rejected());
    }

    #[tokio::test]
    async fn test_create_failure() {
        let store = MockTaskStore::new().with_create_failure(400);
        let err = store.create_task("db", &task("HW1")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::STORE_CREATE_FAILED);
        assert_eq!(err.status(), Some(400));
        assert!(store.created_tasks().await.is_empty());
        assert_eq!(store.create_attempts().await, 1);
    }

    #[tokio::test]
    async fn test_failed_create_is_not_visible_to_queries() {
        let store = MockTaskStore::new().with_create_failure(500);
        let _ = store.create_task("db", &task("HW1")).await;

        let lookup = store.query_titles("db", "rel-abc").await.unwrap();
        assert_eq!(lookup, TitleLookup::Found(Vec::new()));
    }
}
