//! Frontier-scan level assignment.
//!
//! # Overview
//!
//! The wavefront assigner levels a catalog without building an adjacency
//! view: it repeatedly scans the remaining courses in input order and
//! promotes every course whose prerequisites have all been leveled by an
//! earlier pass. Pass number = level. The scan count is bounded by the
//! deepest prerequisite chain, so cost is O(L·N·P) against the
//! topological assigner's O(N + E); the trade is simplicity and a second
//! opinion the fast path can be checked against.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::catalog::{Course, CourseId, LeveledCourse};
use crate::level::graph::cycle_members;
use crate::level::{LevelError, validate_catalog};

/// Assign levels by repeated frontier scans.
///
/// # Algorithm
///
/// Each pass promotes the courses whose prerequisites were all leveled on
/// earlier passes. Promotions made during a pass become visible only on
/// the next one, so every course lands exactly one level above its
/// deepest prerequisite. Output preserves catalog order.
///
/// # Errors
///
/// [`LevelError::DuplicateId`] and [`LevelError::UnknownPrerequisite`]
/// pass through from [`validate_catalog`].
/// [`LevelError::CycleDetected`] when a pass promotes nothing while
/// courses remain; the payload names the courses on the cycle.
#[instrument(skip(courses), fields(courses = courses.len()))]
pub fn assign_levels_wavefront(courses: &[Course]) -> Result<Vec<LeveledCourse>, LevelError> {
    validate_catalog(courses)?;

    let mut levels: HashMap<CourseId, usize> = HashMap::with_capacity(courses.len());
    let mut wave = 0_usize;

    while levels.len() < courses.len() {
        let promoted: Vec<CourseId> = courses
            .iter()
            .filter(|course| !levels.contains_key(&course.id))
            .filter(|course| course.prerequisites().all(|p| levels.contains_key(&p)))
            .map(|course| course.id)
            .collect();

        if promoted.is_empty() {
            let stalled: Vec<&Course> = courses
                .iter()
                .filter(|course| !levels.contains_key(&course.id))
                .collect();
            return Err(LevelError::CycleDetected(cycle_members(&stalled)));
        }

        debug!(wave, promoted = promoted.len(), "frontier promoted");
        for id in promoted {
            levels.insert(id, wave);
        }
        wave += 1;
    }

    Ok(super::annotate(courses, &levels))
}
