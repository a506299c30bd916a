//! Command implementations for `ldr`.
//!
//! Each submodule owns one subcommand: argument struct, serializable
//! payload, `run_*` entry point, and human renderer. Shared plumbing
//! (catalog loading, algorithm selection, leveling-error presentation)
//! lives here.

use std::path::Path;

use clap::ValueEnum;
use ladder_core::{CatalogStore, Course, LevelError, LeveledCourse};

use crate::output::{CliError, OutputMode, render_error};
use crate::store::JsonCatalog;

pub mod check;
pub mod levels;
pub mod plan;
pub mod stats;

/// Level assignment algorithm, selectable on `levels` and `plan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Repeated frontier scans. Simple, quadratic on deep catalogs.
    Wavefront,
    /// Kahn's algorithm over the prerequisite graph. Linear.
    Topological,
}

impl Algorithm {
    /// Run the selected assigner.
    pub fn assign(self, courses: &[Course]) -> Result<Vec<LeveledCourse>, LevelError> {
        match self {
            Self::Wavefront => ladder_core::assign_levels_wavefront(courses),
            Self::Topological => ladder_core::assign_levels_topological(courses),
        }
    }

    /// Name used in payloads and log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wavefront => "wavefront",
            Self::Topological => "topological",
        }
    }
}

/// Load the catalog file, rendering a structured error when it is absent.
pub fn load_catalog(path: &Path, output: OutputMode) -> anyhow::Result<Vec<Course>> {
    if !path.exists() {
        render_error(
            output,
            &CliError::with_details(
                format!("catalog file not found: {}", path.display()),
                "pass --catalog <path> or create catalog.json",
                "catalog_missing",
            ),
        )?;
        anyhow::bail!("catalog not found");
    }
    JsonCatalog::new(path).load()
}

/// Map a leveling failure onto a structured CLI error.
pub fn level_error_details(err: &LevelError) -> CliError {
    match err {
        LevelError::DuplicateId(_) => CliError::with_details(
            err.to_string(),
            "remove or renumber the duplicate catalog entry",
            "duplicate_id",
        ),
        LevelError::UnknownPrerequisite { .. } => CliError::with_details(
            err.to_string(),
            "fix the reference or drop it with `ldr levels --prune`",
            "unknown_prerequisite",
        ),
        LevelError::CycleDetected(_) => CliError::with_details(
            err.to_string(),
            "break the loop by removing one of the listed prerequisites",
            "cycle_detected",
        ),
        LevelError::EmptyInput => CliError::with_details(
            err.to_string(),
            "add at least one course to the catalog",
            "empty_catalog",
        ),
    }
}
