//! Utilities over leveled output.
//!
//! Everything here consumes or reorders assigner output without touching
//! levels: the deepest level, the per-level grouping a term plan is built
//! from, and the required-first ordering inside each group.

use crate::catalog::LeveledCourse;
use crate::level::LevelError;

/// The deepest level in a leveled catalog.
///
/// # Errors
///
/// [`LevelError::EmptyInput`] when there are no courses to take a level
/// from.
pub fn max_level(courses: &[LeveledCourse]) -> Result<usize, LevelError> {
    courses
        .iter()
        .map(|course| course.level)
        .max()
        .ok_or(LevelError::EmptyInput)
}

/// Group courses by level, one group per level from 0 through the max.
///
/// Within a group, courses keep their input order. Levels with no courses
/// yield an empty group so positions always equal levels. An empty input
/// yields no groups at all.
#[must_use]
pub fn split_by_level(courses: Vec<LeveledCourse>) -> Vec<Vec<LeveledCourse>> {
    let Some(max) = courses.iter().map(|course| course.level).max() else {
        return Vec::new();
    };

    let mut groups: Vec<Vec<LeveledCourse>> = vec![Vec::new(); max + 1];
    for course in courses {
        groups[course.level].push(course);
    }
    groups
}

/// Move required courses to the front of every group.
///
/// The partition is stable: required courses keep their relative order,
/// and so do the rest.
pub fn order_required_first(groups: &mut [Vec<LeveledCourse>]) {
    for group in groups {
        group.sort_by_key(|course| !course.course.required);
    }
}
