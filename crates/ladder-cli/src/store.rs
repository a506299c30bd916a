//! JSON-file catalog store.
//!
//! # Format
//!
//! The catalog file is a JSON array of course objects. Prerequisite lists
//! may be omitted and default to empty:
//!
//! ```json
//! [
//!   { "id": 1, "name": "intro", "credits": 5,
//!     "advanced": false, "domain": "math", "required": true },
//!   { "id": 2, "name": "calculus", "credits": 5,
//!     "advanced": false, "domain": "math", "required": true,
//!     "must_courses": [1] }
//! ]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ladder_core::{CatalogStore, Course, CourseId};
use tracing::debug;

/// A [`CatalogStore`] backed by a JSON file holding an array of courses.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogStore for JsonCatalog {
    fn load(&self) -> Result<Vec<Course>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("read catalog file {}", self.path.display()))?;
        let courses: Vec<Course> = serde_json::from_str(&raw)
            .with_context(|| format!("parse catalog file {}", self.path.display()))?;
        Ok(courses)
    }

    fn save(&self, courses: &[Course]) -> Result<()> {
        let raw = serde_json::to_string_pretty(courses).context("serialize catalog")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("write catalog file {}", self.path.display()))?;
        Ok(())
    }
}

/// Drop prerequisite references that point outside the catalog.
///
/// Scraped feeds routinely cite courses that were filtered out upstream;
/// pruning those references keeps the rest of the catalog levelable.
/// Returns the number of references removed.
pub fn prune_unknown_prereqs(courses: &mut [Course]) -> usize {
    let known: HashSet<CourseId> = courses.iter().map(|course| course.id).collect();
    let mut removed = 0;
    for course in courses.iter_mut() {
        let before = course.prereq_count();
        course.must_courses.retain(|id| known.contains(id));
        course.recommend_courses.retain(|id| known.contains(id));
        removed += before - course.prereq_count();
    }
    if removed > 0 {
        debug!(removed, "pruned unknown prerequisite references");
    }
    removed
}
