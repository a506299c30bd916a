//! `ldr levels` — assign a level to every course in the catalog.

use std::io::Write;
use std::path::Path;

use clap::Args;
use ladder_core::{LeveledCourse, max_level};
use serde::Serialize;

use crate::cmd::{Algorithm, level_error_details, load_catalog};
use crate::output::{OutputMode, render, render_error};
use crate::store::prune_unknown_prereqs;

/// Arguments for `ldr levels`.
#[derive(Args, Debug)]
pub struct LevelsArgs {
    /// Assignment algorithm to run.
    #[arg(long, value_enum, default_value_t = Algorithm::Topological)]
    pub algorithm: Algorithm,

    /// Drop prerequisite references to courses missing from the catalog
    /// before leveling.
    #[arg(long)]
    pub prune: bool,
}

#[derive(Debug, Serialize)]
struct LevelsOutput {
    algorithm: &'static str,
    pruned_refs: usize,
    max_level: Option<usize>,
    courses: Vec<LeveledCourse>,
}

/// Execute `ldr levels`.
pub fn run_levels(
    args: &LevelsArgs,
    output: OutputMode,
    catalog_path: &Path,
) -> anyhow::Result<()> {
    let mut catalog = load_catalog(catalog_path, output)?;

    let pruned_refs = if args.prune {
        prune_unknown_prereqs(&mut catalog)
    } else {
        0
    };

    let leveled = match args.algorithm.assign(&catalog) {
        Ok(leveled) => leveled,
        Err(err) => {
            render_error(output, &level_error_details(&err))?;
            anyhow::bail!("leveling failed");
        }
    };

    let payload = LevelsOutput {
        algorithm: args.algorithm.name(),
        pruned_refs,
        max_level: max_level(&leveled).ok(),
        courses: leveled,
    };

    render(output, &payload, |report, w| render_levels_human(report, w))
}

fn render_levels_human(payload: &LevelsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if payload.courses.is_empty() {
        writeln!(w, "No courses in catalog.")?;
        return Ok(());
    }

    writeln!(
        w,
        "Levels ({} courses, max level {}, {} assigner)",
        payload.courses.len(),
        payload.max_level.unwrap_or(0),
        payload.algorithm
    )?;
    if payload.pruned_refs > 0 {
        writeln!(
            w,
            "Pruned {} unknown prerequisite reference(s).",
            payload.pruned_refs
        )?;
    }
    writeln!(w)?;
    for course in &payload.courses {
        writeln!(
            w,
            "  {:>5}  {:>6}  {:>2}cr  {:<8}  {:<12}  {}",
            course.level,
            course.course.id,
            course.course.credits,
            if course.course.required {
                "required"
            } else {
                "elective"
            },
            course.course.domain,
            course.course.name
        )?;
    }
    Ok(())
}
