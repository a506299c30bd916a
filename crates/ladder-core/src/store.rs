//! Catalog persistence seam.
//!
//! # Overview
//!
//! Leveling itself is pure; where catalogs come from and where snapshots
//! go is a caller concern behind [`CatalogStore`]. The crate ships
//! [`MemoryStore`] for tests and embedding; file-backed stores live with
//! the binaries that own their formats.

#![allow(clippy::module_name_repetitions)]

use std::sync::Mutex;

use anyhow::{Result, anyhow};

use crate::catalog::Course;

// ---------------------------------------------------------------------------
// Store trait
// ---------------------------------------------------------------------------

/// Abstraction over catalog persistence.
///
/// Implementations shuttle whole catalogs in and out of whatever medium
/// they own. The trait is intentionally small; caching, merging, and
/// partial updates are layered on top by callers that need them.
pub trait CatalogStore {
    /// Load the full catalog.
    ///
    /// # Errors
    ///
    /// Whatever the medium fails with: missing files, malformed payloads,
    /// poisoned locks.
    fn load(&self) -> Result<Vec<Course>>;

    /// Replace the stored catalog with `courses`.
    ///
    /// # Errors
    ///
    /// Whatever the medium fails with when writing.
    fn save(&self, courses: &[Course]) -> Result<()>;
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// A [`CatalogStore`] holding the catalog in process memory.
///
/// Interior mutability keeps `save` callable through the same shared
/// reference the trait hands out.
#[derive(Debug, Default)]
pub struct MemoryStore {
    courses: Mutex<Vec<Course>>,
}

impl MemoryStore {
    /// Create a store seeded with `courses`.
    #[must_use]
    pub const fn new(courses: Vec<Course>) -> Self {
        Self {
            courses: Mutex::new(courses),
        }
    }
}

impl CatalogStore for MemoryStore {
    fn load(&self) -> Result<Vec<Course>> {
        let courses = self
            .courses
            .lock()
            .map_err(|_| anyhow!("catalog store lock poisoned"))?;
        Ok(courses.clone())
    }

    fn save(&self, courses: &[Course]) -> Result<()> {
        let mut slot = self
            .courses
            .lock()
            .map_err(|_| anyhow!("catalog store lock poisoned"))?;
        *slot = courses.to_vec();
        Ok(())
    }
}
