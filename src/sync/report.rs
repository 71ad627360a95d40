//! Run summary

/// What happened for one course
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseReport {
    pub course_id: String,
    pub course_name: String,
    /// Tasks created (or that would have been, in a dry run)
    pub created: usize,
    /// Assignments already present by title
    pub skipped: usize,
    /// The title lookup was rejected and treated as empty
    pub lookup_failed: bool,
}

/// What happened across the whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub courses: Vec<CourseReport>,
    pub dry_run: bool,
}

impl SyncReport {
    pub fn created(&self) -> usize {
        self.courses.iter().map(|c| c.created).sum()
    }

    pub fn skipped(&self) -> usize {
        self.courses.iter().map(|c| c.skipped).sum()
    }

    pub fn lookup_failures(&self) -> usize {
        self.courses.iter().filter(|c| c.lookup_failed).count()
    }

    /// One-line summary for the final log message
    pub fn summary(&self) -> String {
        let verb = if self.dry_run { "would create" } else { "created" };
        let mut line = format!(
            "{} course(s): {} {} task(s), skipped {}",
            self.courses.len(),
            verb,
            self.created(),
            self.skipped()
        );
        let failures = self.lookup_failures();
        if failures > 0 {
            line.push_str(&format!(", {} title lookup(s) failed", failures));
        }
        line
    }
}
