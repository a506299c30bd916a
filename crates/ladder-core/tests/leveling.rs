//! Known-topology regression tests for level assignment.
//!
//! Each test uses a hand-crafted catalog with analytically known levels,
//! hardcoded as expectations. Both assigners run against every topology,
//! so any change that makes them disagree or shifts a level will be
//! caught.

use ladder_core::{
    Course, CourseId, LevelError, LeveledCourse, assign_levels_topological,
    assign_levels_wavefront, max_level, order_required_first, split_by_level,
};

type Assign = fn(&[Course]) -> Result<Vec<LeveledCourse>, LevelError>;

const ASSIGNERS: [(&str, Assign); 2] = [
    ("wavefront", assign_levels_wavefront),
    ("topological", assign_levels_topological),
];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn course(
    id: CourseId,
    name: &str,
    required: bool,
    must: &[CourseId],
    recommend: &[CourseId],
) -> Course {
    Course {
        id,
        name: name.to_string(),
        credits: 3,
        advanced: false,
        domain: "core".to_string(),
        required,
        must_courses: must.to_vec(),
        recommend_courses: recommend.to_vec(),
    }
}

fn levels_of(leveled: &[LeveledCourse]) -> Vec<(CourseId, usize)> {
    leveled.iter().map(|c| (c.course.id, c.level)).collect()
}

fn group_ids(groups: &[Vec<LeveledCourse>]) -> Vec<Vec<CourseId>> {
    groups
        .iter()
        .map(|group| group.iter().map(|c| c.course.id).collect())
        .collect()
}

// ===========================================================================
// Topology 1: Diamond with a soft edge
//
//   1 ──must──> 2 ──must──> 3
//   │                       ^
//   └─────────must──────────┘
//   2 ──recommend──> 4
//
// Properties:
//   - Levels: 1→0, 2→1, 3→2, 4→2.
//   - Max level 2; groups [[1], [2], [3, 4]].
//   - The soft edge into 4 counts exactly like a hard one.
// ===========================================================================

fn diamond() -> Vec<Course> {
    vec![
        course(1, "intro", true, &[], &[]),
        course(2, "data structures", true, &[1], &[]),
        course(3, "algorithms", true, &[1, 2], &[]),
        course(4, "seminar", false, &[], &[2]),
    ]
}

#[test]
fn diamond_levels() {
    for (name, assign) in ASSIGNERS {
        let leveled = assign(&diamond()).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(
            levels_of(&leveled),
            vec![(1, 0), (2, 1), (3, 2), (4, 2)],
            "{name} levels"
        );
    }
}

#[test]
fn diamond_max_level_is_two() {
    for (name, assign) in ASSIGNERS {
        let leveled = assign(&diamond()).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(max_level(&leveled), Ok(2), "{name} max level");
    }
}

#[test]
fn diamond_groups_by_level_in_input_order() {
    for (name, assign) in ASSIGNERS {
        let leveled = assign(&diamond()).unwrap_or_else(|e| panic!("{name}: {e}"));
        let groups = split_by_level(leveled);
        assert_eq!(
            group_ids(&groups),
            vec![vec![1], vec![2], vec![3, 4]],
            "{name} groups"
        );
    }
}

#[test]
fn diamond_required_first_reorders_the_top_group() {
    // Put the optional seminar ahead of algorithms in catalog order; the
    // required course must come back to the front of its group.
    let catalog = vec![
        course(1, "intro", true, &[], &[]),
        course(2, "data structures", true, &[1], &[]),
        course(4, "seminar", false, &[], &[2]),
        course(3, "algorithms", true, &[1, 2], &[]),
    ];
    for (name, assign) in ASSIGNERS {
        let leveled = assign(&catalog).unwrap_or_else(|e| panic!("{name}: {e}"));
        let mut groups = split_by_level(leveled);
        order_required_first(&mut groups);
        assert_eq!(
            group_ids(&groups),
            vec![vec![1], vec![2], vec![3, 4]],
            "{name} required-first groups"
        );
    }
}

// ===========================================================================
// Topology 2: Linear chain (1 → 2 → 3 → 4)
//
// Properties:
//   - Levels equal chain position: 0, 1, 2, 3.
//   - Forces the wavefront assigner through its maximum pass count.
// ===========================================================================

#[test]
fn chain_levels_equal_position() {
    let catalog = vec![
        course(1, "a", true, &[], &[]),
        course(2, "b", true, &[1], &[]),
        course(3, "c", true, &[2], &[]),
        course(4, "d", true, &[3], &[]),
    ];
    for (name, assign) in ASSIGNERS {
        let leveled = assign(&catalog).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(
            levels_of(&leveled),
            vec![(1, 0), (2, 1), (3, 2), (4, 3)],
            "{name} chain levels"
        );
    }
}

// ===========================================================================
// Topology 3: Deep-vs-shallow join
//
//   1 → 2 → 3 ─┐
//   1 ────────> 5        (5: must=[3], recommend=[1])
//
// Properties:
//   - 5 must take the deep branch: level 3, not 1.
//   - Regression against consuming prerequisite edges in arrival order
//     and keeping the last writer's level.
// ===========================================================================

#[test]
fn join_takes_deepest_prerequisite() {
    let catalog = vec![
        course(1, "root", true, &[], &[]),
        course(2, "mid", true, &[1], &[]),
        course(3, "deep", true, &[2], &[]),
        course(5, "join", true, &[3], &[1]),
    ];
    for (name, assign) in ASSIGNERS {
        let leveled = assign(&catalog).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(
            levels_of(&leveled),
            vec![(1, 0), (2, 1), (3, 2), (5, 3)],
            "{name} join levels"
        );
    }
}

// ===========================================================================
// Topology 4: Cycles
//
//   1 ⇄ 2, with 3 → (waits on 1)
//
// Properties:
//   - Both assigners fail fast with CycleDetected.
//   - The error names only the courses on the loop, sorted.
// ===========================================================================

#[test]
fn cycle_fails_fast_with_members() {
    let catalog = vec![
        course(1, "a", true, &[2], &[]),
        course(2, "b", true, &[1], &[]),
        course(3, "c", true, &[1], &[]),
    ];
    for (name, assign) in ASSIGNERS {
        assert_eq!(
            assign(&catalog),
            Err(LevelError::CycleDetected(vec![1, 2])),
            "{name} cycle"
        );
    }
}

#[test]
fn soft_edge_can_close_a_cycle() {
    let catalog = vec![
        course(1, "a", true, &[], &[2]),
        course(2, "b", true, &[1], &[]),
    ];
    for (name, assign) in ASSIGNERS {
        assert_eq!(
            assign(&catalog),
            Err(LevelError::CycleDetected(vec![1, 2])),
            "{name} soft cycle"
        );
    }
}

// ===========================================================================
// Topology 5: Malformed catalogs
// ===========================================================================

#[test]
fn unknown_prerequisite_is_rejected() {
    let catalog = vec![
        course(1, "a", true, &[], &[]),
        course(3, "c", true, &[999], &[]),
    ];
    for (name, assign) in ASSIGNERS {
        assert_eq!(
            assign(&catalog),
            Err(LevelError::UnknownPrerequisite {
                course: 3,
                prereq: 999
            }),
            "{name} unknown prereq"
        );
    }
}

#[test]
fn duplicate_id_is_rejected() {
    let catalog = vec![
        course(1, "a", true, &[], &[]),
        course(1, "a again", true, &[], &[]),
    ];
    for (name, assign) in ASSIGNERS {
        assert_eq!(
            assign(&catalog),
            Err(LevelError::DuplicateId(1)),
            "{name} duplicate id"
        );
    }
}

// ===========================================================================
// Topology 6: Empty and single-course catalogs
// ===========================================================================

#[test]
fn empty_catalog_levels_to_nothing() {
    for (name, assign) in ASSIGNERS {
        let leveled = assign(&[]).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(leveled.is_empty(), "{name} empty catalog");
        assert_eq!(max_level(&leveled), Err(LevelError::EmptyInput));
        assert!(split_by_level(leveled).is_empty());
    }
}

#[test]
fn single_course_sits_at_level_zero() {
    let catalog = vec![course(42, "only", true, &[], &[])];
    for (name, assign) in ASSIGNERS {
        let leveled = assign(&catalog).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(levels_of(&leveled), vec![(42, 0)], "{name} single course");
        assert_eq!(max_level(&leveled), Ok(0));
    }
}

// ===========================================================================
// Topology 7: Wide catalog
//
//   One root, twenty direct dependents, one course joining them all.
//
// Properties:
//   - Levels: root 0, dependents 1, join 2.
//   - Exercises dependent fan-out and the full-group scan in one shape.
// ===========================================================================

#[test]
fn wide_fan_out_levels() {
    let mut catalog = vec![course(1, "root", true, &[], &[])];
    for id in 2..=21 {
        catalog.push(course(id, "branch", false, &[1], &[]));
    }
    let all_branches: Vec<CourseId> = (2..=21).collect();
    catalog.push(course(99, "join", true, &all_branches, &[]));

    for (name, assign) in ASSIGNERS {
        let leveled = assign(&catalog).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(leveled[0].level, 0, "{name} root");
        assert!(
            leveled[1..=20].iter().all(|c| c.level == 1),
            "{name} branches"
        );
        assert_eq!(leveled[21].level, 2, "{name} join");

        let groups = split_by_level(leveled);
        assert_eq!(groups.len(), 3, "{name} group count");
        assert_eq!(groups[1].len(), 20, "{name} branch group");
    }
}

// ===========================================================================
// Assigner agreement
// ===========================================================================

#[test]
fn assigners_agree_on_every_acyclic_topology() {
    let catalogs: Vec<Vec<Course>> = vec![
        diamond(),
        vec![course(1, "solo", true, &[], &[])],
        vec![
            course(10, "x", false, &[], &[]),
            course(20, "y", false, &[10], &[]),
            course(30, "z", false, &[10], &[20]),
        ],
    ];
    for catalog in catalogs {
        let wave = assign_levels_wavefront(&catalog).unwrap();
        let topo = assign_levels_topological(&catalog).unwrap();
        assert_eq!(wave, topo);
    }
}
