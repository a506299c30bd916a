//! Queue-based level assignment (Kahn's algorithm).
//!
//! # Overview
//!
//! The topological assigner builds a [`PrereqGraph`] and drains a FIFO
//! queue of courses whose prerequisites are all consumed, assigning each
//! course a level as it finalizes. One visit per course, one decrement per
//! edge: O(N + E) regardless of chain depth.
//!
//! # Level Tracking
//!
//! A course's level is one more than its *deepest* prerequisite, so a
//! candidate level accumulates as a running max while prerequisite edges
//! are consumed and is finalized only when the last edge goes. Finalized
//! levels and pending candidates live in separate maps; a course appears
//! in `levels` only once its level can no longer change.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, instrument};

use crate::catalog::{Course, CourseId, LeveledCourse};
use crate::level::graph::{PrereqGraph, cycle_members};
use crate::level::{LevelError, validate_catalog};

/// Assign levels by topological traversal.
///
/// # Algorithm
///
/// Seeds the queue with prerequisite-free courses at level 0, in catalog
/// order. Each dequeued course raises its dependents' candidate levels to
/// at least its own level plus one and consumes one of their prerequisite
/// edges; a dependent whose last edge is consumed finalizes at its
/// candidate level and joins the queue. Output preserves catalog order.
///
/// # Errors
///
/// [`LevelError::DuplicateId`] and [`LevelError::UnknownPrerequisite`]
/// pass through from [`validate_catalog`].
/// [`LevelError::CycleDetected`] when the queue drains with courses still
/// unleveled; the payload names the courses on the cycle.
#[instrument(skip(courses), fields(courses = courses.len()))]
pub fn assign_levels_topological(courses: &[Course]) -> Result<Vec<LeveledCourse>, LevelError> {
    validate_catalog(courses)?;

    let PrereqGraph {
        dependents,
        mut indegree,
    } = PrereqGraph::build(courses);

    let mut levels: HashMap<CourseId, usize> = HashMap::with_capacity(courses.len());
    let mut pending: HashMap<CourseId, usize> = HashMap::new();
    let mut queue: VecDeque<CourseId> = VecDeque::new();

    for course in courses {
        if course.has_no_prerequisites() {
            levels.insert(course.id, 0);
            queue.push_back(course.id);
        }
    }

    let mut processed = 0_usize;
    while let Some(id) = queue.pop_front() {
        processed += 1;
        let level = levels.get(&id).copied().unwrap_or(0);

        let Some(next) = dependents.get(&id) else {
            continue;
        };
        for &dependent in next {
            let candidate = {
                let slot = pending.entry(dependent).or_insert(0);
                *slot = (*slot).max(level + 1);
                *slot
            };
            if let Some(remaining) = indegree.get_mut(&dependent) {
                *remaining -= 1;
                if *remaining == 0 {
                    levels.insert(dependent, candidate);
                    queue.push_back(dependent);
                }
            }
        }
    }

    debug!(processed, total = courses.len(), "queue drained");

    if processed < courses.len() {
        let stalled: Vec<&Course> = courses
            .iter()
            .filter(|course| !levels.contains_key(&course.id))
            .collect();
        return Err(LevelError::CycleDetected(cycle_members(&stalled)));
    }

    Ok(super::annotate(courses, &levels))
}
