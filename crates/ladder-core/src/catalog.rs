//! Catalog data model.
//!
//! # Overview
//!
//! [`Course`] is the unit of input: a catalog entry with identity,
//! descriptive fields, and two prerequisite lists. `must_courses` are hard
//! prerequisites, `recommend_courses` are soft ones. Leveling treats both
//! kinds as edges of the same weight; the distinction is kept for display
//! and planning, not for the algorithms.
//!
//! [`LeveledCourse`] is the unit of output: a course plus its derived
//! level. It wraps a [`Course`] by value rather than extending it, so the
//! level can only exist on a record that went through an assigner.

use serde::{Deserialize, Serialize};

/// Catalog-wide course identifier.
pub type CourseId = u32;

// --- course ----------------------------------------------------------------

/// A single catalog entry.
///
/// Prerequisite lists refer to other courses by id. Both lists default to
/// empty when absent from serialized input, so minimal catalogs only need
/// the descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub credits: u32,
    /// Advanced-standing course, shown differently by frontends.
    pub advanced: bool,
    /// Free-form subject area, e.g. `"math"` or `"systems"`.
    pub domain: String,
    /// Whether the course is mandatory for the program.
    pub required: bool,
    /// Hard prerequisites. Must be cleared before this course.
    #[serde(default)]
    pub must_courses: Vec<CourseId>,
    /// Soft prerequisites. Treated as edges by leveling all the same.
    #[serde(default)]
    pub recommend_courses: Vec<CourseId>,
}

impl Course {
    /// Iterates over all prerequisite ids, hard ones first.
    pub fn prerequisites(&self) -> impl Iterator<Item = CourseId> + '_ {
        self.must_courses
            .iter()
            .chain(self.recommend_courses.iter())
            .copied()
    }

    /// Total number of prerequisite edges into this course.
    #[must_use]
    pub fn prereq_count(&self) -> usize {
        self.must_courses.len() + self.recommend_courses.len()
    }

    /// True when the course can be taken in the first term.
    #[must_use]
    pub fn has_no_prerequisites(&self) -> bool {
        self.must_courses.is_empty() && self.recommend_courses.is_empty()
    }
}

// --- leveled course --------------------------------------------------------

/// A course annotated with its derived level.
///
/// Level 0 means no prerequisites; otherwise the level is one more than
/// the highest level among the course's prerequisites. Serializes flat,
/// with `level` alongside the course fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeveledCourse {
    #[serde(flatten)]
    pub course: Course,
    pub level: usize,
}

// ---------------------------------------------------------------------------
