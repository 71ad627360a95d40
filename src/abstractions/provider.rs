//! Assignment provider abstraction
//!
//! The sync driver only needs two things from the learning-management
//! system: a course's display record and its full assignment list.

use crate::canvas::{Assignment, Course};
use crate::error::{common, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Source of course assignments
///
/// Implementations own pagination. Any failure is returned as an error and
/// ends the run.
#[async_trait]
pub trait AssignmentProvider: Send + Sync {
    /// Fetch a course by id
    async fn get_course(&self, course_id: &str) -> Result<Course>;

    /// Fetch every assignment of a course
    async fn list_assignments(&self, course_id: &str) -> Result<Vec<Assignment>>;
}

/// Calls recorded by [`MockAssignmentProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    GetCourse(String),
    ListAssignments(String),
}

/// Mock implementation of `AssignmentProvider` for testing
#[derive(Clone, Default)]
pub struct MockAssignmentProvider {
    courses: HashMap<String, Vec<Assignment>>,
    failures: HashMap<String, u16>,
    /// Track calls for verification
    pub calls: Arc<Mutex<Vec<ProviderCall>>>,
}

impl MockAssignmentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a course and its assignments
    pub fn with_course(mut self, course_id: &str, assignments: Vec<Assignment>) -> Self {
        self.courses.insert(course_id.to_string(), assignments);
        self
    }

    /// Make every request for `course_id` fail with `status`
    pub fn with_failure(mut self, course_id: &str, status: u16) -> Self {
        self.failures.insert(course_id.to_string(), status);
        self
    }

    pub async fn get_calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().await.clone()
    }

    fn check(&self, course_id: &str, what: &str) -> Result<()> {
        if let Some(status) = self.failures.get(course_id) {
            return Err(common::provider_status(*status, what, "mock failure"));
        }
        if !self.courses.contains_key(course_id) {
            return Err(common::provider_status(404, what, "course not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl AssignmentProvider for MockAssignmentProvider {
    async fn get_course(&self, course_id: &str) -> Result<Course> {
        self.calls
            .lock()
            .await
            .push(ProviderCall::GetCourse(course_id.to_string()));
        self.check(course_id, "get course")?;
        Ok(Course {
            id: course_id.to_string(),
            name: format!("Course {}", course_id),
        })
    }

    async fn list_assignments(&self, course_id: &str) -> Result<Vec<Assignment>> {
        self.calls
            .lock()
            .await
            .push(ProviderCall::ListAssignments(course_id.to_string()));
        self.check(course_id, "list assignments")?;
        Ok(self.courses.get(course_id).cloned().unwrap_or_default())
    }
}
