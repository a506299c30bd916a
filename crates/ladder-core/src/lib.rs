#![forbid(unsafe_code)]
//! Course prerequisite leveling engine.
//!
//! # Overview
//!
//! Given a catalog of courses linked by hard ("must") and soft
//! ("recommend") prerequisite edges, this crate assigns every course a
//! *level*: the minimum number of sequential terms that have to be cleared
//! before the course can be taken, equal to the longest prerequisite chain
//! ending at it. Two independently usable assigners are provided and agree
//! on every acyclic catalog:
//!
//! ```text
//! Vec<Course>
//!   ├─ wavefront::assign_levels_wavefront()   repeated frontier scans, O(L·N)
//!   └─ kahn::assign_levels_topological()      indegree work queue, O(N + E)
//!          ↓
//! Vec<LeveledCourse>  (course + level, input order preserved)
//!          ↓
//! groups::{max_level, split_by_level, order_required_first}
//! ```
//!
//! Leveling is pure and synchronous: no I/O, no shared state between
//! calls, no mutation of the input. Catalog persistence lives behind the
//! [`store::CatalogStore`] seam so callers decide where course data comes
//! from and where snapshots go.
//!
//! # Conventions
//!
//! - **Errors**: typed [`LevelError`] from the engine; `anyhow::Result`
//!   at the store boundary.
//! - **Logging**: `tracing` macros; the assigner entry points carry spans.

pub mod catalog;
pub mod level;
pub mod store;

pub use catalog::{Course, CourseId, LeveledCourse};
pub use level::groups::{max_level, order_required_first, split_by_level};
pub use level::kahn::assign_levels_topological;
pub use level::wavefront::assign_levels_wavefront;
pub use level::{LevelError, validate_catalog};
pub use store::{CatalogStore, MemoryStore};
