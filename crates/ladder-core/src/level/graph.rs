//! Prerequisite graph construction and cycle membership.
//!
//! # Overview
//!
//! [`PrereqGraph`] is the adjacency view the topological assigner works
//! from: for every course, who depends on it and how many prerequisites it
//! still has. [`cycle_members`] names the courses on a cycle once an
//! assigner has stalled.
//!
//! ## Edge Direction
//!
//! An edge `A → B` means "A must be taken before B": A is a prerequisite
//! (hard or soft) of B. Dependents are therefore the forward direction of
//! the scheduling order, while `must_courses`/`recommend_courses` on the
//! course record point backwards.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::catalog::{Course, CourseId};

// ---------------------------------------------------------------------------
// PrereqGraph
// ---------------------------------------------------------------------------

/// Adjacency and indegree view of a catalog's prerequisite edges.
///
/// Prerequisite references are expected to resolve; run
/// [`validate_catalog`](crate::level::validate_catalog) first. Unresolved
/// ids end up as dependent entries with no indegree, which the assigners
/// never dequeue.
#[derive(Debug, Default)]
pub struct PrereqGraph {
    /// For each course id, the ids that list it as a prerequisite, in
    /// catalog order.
    pub dependents: HashMap<CourseId, Vec<CourseId>>,
    /// For each course id, the number of prerequisite edges into it.
    pub indegree: HashMap<CourseId, usize>,
}

impl PrereqGraph {
    /// Build the adjacency view from a catalog.
    ///
    /// Every course gets an entry in both maps, even when isolated, so
    /// lookups during traversal never miss.
    #[must_use]
    pub fn build(courses: &[Course]) -> Self {
        let mut dependents: HashMap<CourseId, Vec<CourseId>> =
            HashMap::with_capacity(courses.len());
        let mut indegree: HashMap<CourseId, usize> = HashMap::with_capacity(courses.len());

        for course in courses {
            dependents.entry(course.id).or_default();
            indegree.insert(course.id, course.prereq_count());
        }

        for course in courses {
            for prereq in course.prerequisites() {
                dependents.entry(prereq).or_default().push(course.id);
            }
        }

        Self {
            dependents,
            indegree,
        }
    }
}

// ---------------------------------------------------------------------------
// Cycle membership
// ---------------------------------------------------------------------------

/// Name the courses on a prerequisite cycle within a stalled remainder.
///
/// Builds the sub-graph induced by `stalled`, finds its strongly connected
/// components, and returns the sorted ids of every component that is an
/// actual cycle (more than one member, or a self-loop). When no such
/// component exists the whole stalled set is returned, so the caller's
/// error always names at least one course.
#[must_use]
pub fn cycle_members(stalled: &[&Course]) -> Vec<CourseId> {
    let mut graph = DiGraph::<CourseId, ()>::new();
    let mut node_map: HashMap<CourseId, NodeIndex> = HashMap::with_capacity(stalled.len());

    for course in stalled {
        let idx = graph.add_node(course.id);
        node_map.insert(course.id, idx);
    }

    for course in stalled {
        let to = node_map[&course.id];
        for prereq in course.prerequisites() {
            if let Some(&from) = node_map.get(&prereq) {
                graph.add_edge(from, to, ());
            }
        }
    }

    let mut members: Vec<CourseId> = tarjan_scc(&graph)
        .into_iter()
        .filter(|component| {
            component.len() > 1
                || component
                    .first()
                    .is_some_and(|&node| graph.find_edge(node, node).is_some())
        })
        .flatten()
        .filter_map(|idx| graph.node_weight(idx).copied())
        .collect();

    if members.is_empty() {
        members = stalled.iter().map(|course| course.id).collect();
    }

    members.sort_unstable();
    members
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
