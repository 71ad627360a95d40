//! Course-by-course synchronization
//!
//! Each course goes through two phases. Fetch-and-compare reads the course,
//! the titles already filed under it and its assignments, then partitions
//! the assignments by title. Write-missing creates one task per assignment
//! that had no matching title. Courses are processed strictly in order and
//! the first fatal error ends the run.

use super::report::{CourseReport, SyncReport};
use crate::abstractions::{AssignmentProvider, TaskStore};
use crate::canvas::{Assignment, Course};
use crate::config::CourseMapping;
use crate::error::{common, ErrorCode, Result};
use crate::notion::{NewTask, TitleLookup};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Behavior switches for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Report what would be created without creating anything
    pub dry_run: bool,
    /// Abort when the title lookup is rejected instead of treating it as empty
    pub strict: bool,
}

/// What the write phase does with one assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedWrite {
    /// No task has this title yet
    Create(Assignment),
    /// A task with this title already exists
    Skip(Assignment),
}

impl PlannedWrite {
    pub fn assignment(&self) -> &Assignment {
        match self {
            Self::Create(a) | Self::Skip(a) => a,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create(_))
    }
}

/// Result of the fetch-and-compare phase for one course
#[derive(Debug, Clone)]
pub struct CoursePlan {
    pub mapping: CourseMapping,
    pub course: Course,
    pub lookup_failed: bool,
    /// One entry per assignment, in provider order
    pub writes: Vec<PlannedWrite>,
}

impl CoursePlan {
    /// Number of assignments with no matching title
    pub fn to_create(&self) -> usize {
        self.writes.iter().filter(|w| w.is_create()).count()
    }

    /// Number of assignments whose title is already present
    pub fn skipped(&self) -> usize {
        self.writes.len() - self.to_create()
    }
}

/// Mark each assignment as create or skip by exact title match, keeping
/// provider order
pub fn missing_assignments(
    assignments: Vec<Assignment>,
    existing_titles: &[String],
) -> Vec<PlannedWrite> {
    let existing: HashSet<&str> = existing_titles.iter().map(String::as_str).collect();
    assignments
        .into_iter()
        .map(|a| {
            if existing.contains(a.name.as_str()) {
                PlannedWrite::Skip(a)
            } else {
                PlannedWrite::Create(a)
            }
        })
        .collect()
}

/// Drives the sync between one assignment provider and one task store
pub struct SyncDriver {
    provider: Arc<dyn AssignmentProvider>,
    store: Arc<dyn TaskStore>,
    database_id: String,
    options: SyncOptions,
}

impl SyncDriver {
    pub fn new(
        provider: Arc<dyn AssignmentProvider>,
        store: Arc<dyn TaskStore>,
        database_id: impl Into<String>,
        options: SyncOptions,
    ) -> Self {
        Self {
            provider,
            store,
            database_id: database_id.into(),
            options,
        }
    }

    /// Sync every mapping in order
    pub async fn run(&self, mappings: &[CourseMapping]) -> Result<SyncReport> {
        let mut report = SyncReport {
            courses: Vec::with_capacity(mappings.len()),
            dry_run: self.options.dry_run,
        };
        for mapping in mappings {
            report.courses.push(self.sync_course(mapping).await?);
        }
        info!("{}", report.summary());
        Ok(report)
    }

    /// Sync a single course
    pub async fn sync_course(&self, mapping: &CourseMapping) -> Result<CourseReport> {
        let plan = self.plan_course(mapping).await?;
        let created = self.write_missing(&plan).await?;
        Ok(CourseReport {
            course_id: plan.course.id.clone(),
            course_name: plan.course.name.clone(),
            created,
            skipped: plan.skipped(),
            lookup_failed: plan.lookup_failed,
        })
    }

    /// Fetch-and-compare phase
    pub async fn plan_course(&self, mapping: &CourseMapping) -> Result<CoursePlan> {
        let course = self.provider.get_course(&mapping.source_course_id).await?;
        info!("COURSE: {} ({})", course.name, mapping.source_course_id);

        let (titles, lookup_failed) = self
            .existing_titles(&mapping.destination_relation_id)
            .await?;
        debug!(
            "{} existing title(s) under relation {}",
            titles.len(),
            mapping.destination_relation_id
        );

        let assignments = self
            .provider
            .list_assignments(&mapping.source_course_id)
            .await?;
        let writes = missing_assignments(assignments, &titles);

        Ok(CoursePlan {
            mapping: mapping.clone(),
            course,
            lookup_failed,
            writes,
        })
    }

    /// Titles already filed under the relation; a rejected lookup counts as
    /// none unless the run is strict
    async fn existing_titles(&self, relation_id: &str) -> Result<(Vec<String>, bool)> {
        match self
            .store
            .query_titles(&self.database_id, relation_id)
            .await?
        {
            TitleLookup::Found(titles) => Ok((titles, false)),
            TitleLookup::Rejected { status, body } => {
                if self.options.strict {
                    return Err(common::store_status(
                        ErrorCode::STORE_QUERY_REJECTED,
                        status,
                        "query database",
                        &body,
                    ));
                }
                warn!("Error: {}, {}", status, body);
                Ok((Vec::new(), true))
            }
        }
    }

    /// Write-missing phase; returns the number of tasks created
    pub async fn write_missing(&self, plan: &CoursePlan) -> Result<usize> {
        let mut created = 0;
        for write in &plan.writes {
            let assignment = match write {
                PlannedWrite::Skip(assignment) => {
                    info!(
                        "Assignment '{}' already in Notion. Skipping...",
                        assignment.name
                    );
                    continue;
                }
                PlannedWrite::Create(assignment) => assignment,
            };

            let task = NewTask::for_assignment(assignment, &plan.mapping.destination_relation_id);
            if self.options.dry_run {
                info!("[dry-run] Would write assignment '{}' to Notion", task.title);
            } else {
                info!("Writing assignment '{}' to Notion...", task.title);
                self.store
                    .create_task(&self.database_id, &task)
                    .await
                    .map_err(|e| e.with_context(format!("course {}", plan.course.id)))?;
            }
            created += 1;
        }
        Ok(created)
    }
}
