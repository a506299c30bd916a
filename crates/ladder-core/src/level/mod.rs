//! Prerequisite leveling.
//!
//! # Overview
//!
//! A course's *level* is the length of the longest prerequisite chain
//! ending at it: 0 for courses with no prerequisites, otherwise one more
//! than the highest level among its hard and soft prerequisites. Two
//! assigners compute the same mapping by different routes:
//!
//! - [`wavefront::assign_levels_wavefront`] scans the catalog in input
//!   order, promoting every course whose prerequisites are already
//!   leveled, until nothing is left. Simple, quadratic in the worst case.
//! - [`kahn::assign_levels_topological`] runs Kahn's algorithm over the
//!   prerequisite graph. Linear in courses plus edges.
//!
//! Both validate the catalog up front and return courses in input order;
//! cyclic catalogs are rejected with the cycle membership in the error.
//!
//! # Errors
//!
//! [`LevelError`] covers the whole subsystem: malformed catalogs
//! (duplicate ids, dangling prerequisite references), cycles, and
//! level queries over empty input.
#![allow(clippy::module_name_repetitions)]

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::catalog::{Course, CourseId, LeveledCourse};

pub mod graph;
pub mod groups;
pub mod kahn;
pub mod wavefront;

// --- errors ----------------------------------------------------------------

/// Errors from catalog validation and level assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// Two catalog entries share an id.
    #[error("duplicate course id {0} in catalog")]
    DuplicateId(CourseId),

    /// A prerequisite list names an id with no catalog entry.
    #[error("course {course} lists unknown prerequisite {prereq}")]
    UnknownPrerequisite {
        course: CourseId,
        prereq: CourseId,
    },

    /// The prerequisite graph contains a cycle. Carries the sorted ids of
    /// the courses on the cycle.
    #[error("prerequisite cycle involving courses {0:?}")]
    CycleDetected(Vec<CourseId>),

    /// A level query over zero courses.
    #[error("no courses to take a level from")]
    EmptyInput,
}

// --- validation ------------------------------------------------------------

/// Checks that every id is unique and every prerequisite resolves.
///
/// Scans in input order and reports the first offender: all duplicates
/// are found before any dangling reference.
///
/// # Errors
///
/// [`LevelError::DuplicateId`] when two entries share an id,
/// [`LevelError::UnknownPrerequisite`] when a prerequisite list names a
/// course the catalog does not contain.
pub fn validate_catalog(courses: &[Course]) -> Result<(), LevelError> {
    let mut seen = HashSet::with_capacity(courses.len());
    for course in courses {
        if !seen.insert(course.id) {
            return Err(LevelError::DuplicateId(course.id));
        }
    }
    for course in courses {
        for prereq in course.prerequisites() {
            if !seen.contains(&prereq) {
                return Err(LevelError::UnknownPrerequisite {
                    course: course.id,
                    prereq,
                });
            }
        }
    }
    Ok(())
}

/// Pairs every course with its assigned level, preserving input order.
///
/// Callers guarantee the map covers all ids; a missing entry falls back
/// to level 0 rather than poisoning the whole result.
fn annotate(courses: &[Course], levels: &HashMap<CourseId, usize>) -> Vec<LeveledCourse> {
    courses
        .iter()
        .map(|course| LeveledCourse {
            course: course.clone(),
            level: levels.get(&course.id).copied().unwrap_or(0),
        })
        .collect()
}

// ---------------------------------------------------------------------------
