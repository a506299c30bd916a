//! `ldr check` — validate the catalog without printing a full plan.
//!
//! Runs the whole leveling pipeline and reports either a short summary or
//! the first structural problem found. Exit status is the machine-readable
//! part: zero when the catalog levels cleanly, non-zero otherwise.

use std::io::Write;
use std::path::Path;

use ladder_core::{assign_levels_topological, max_level};
use serde::Serialize;

use crate::cmd::{level_error_details, load_catalog};
use crate::output::{OutputMode, render, render_error};

#[derive(Debug, Serialize)]
struct CheckOutput {
    ok: bool,
    courses: usize,
    must_edges: usize,
    recommend_edges: usize,
    max_level: Option<usize>,
}

/// Execute `ldr check`.
pub fn run_check(output: OutputMode, catalog_path: &Path) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path, output)?;

    let leveled = match assign_levels_topological(&catalog) {
        Ok(leveled) => leveled,
        Err(err) => {
            render_error(output, &level_error_details(&err))?;
            anyhow::bail!("catalog check failed");
        }
    };

    let payload = CheckOutput {
        ok: true,
        courses: catalog.len(),
        must_edges: catalog.iter().map(|c| c.must_courses.len()).sum(),
        recommend_edges: catalog.iter().map(|c| c.recommend_courses.len()).sum(),
        max_level: max_level(&leveled).ok(),
    };

    render(output, &payload, |report, w| render_check_human(report, w))
}

fn render_check_human(payload: &CheckOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "Catalog OK.")?;
    writeln!(w, "  courses:          {}", payload.courses)?;
    writeln!(w, "  must edges:       {}", payload.must_edges)?;
    writeln!(w, "  recommend edges:  {}", payload.recommend_edges)?;
    match payload.max_level {
        Some(max) => writeln!(w, "  max level:        {max}")?,
        None => writeln!(w, "  max level:        n/a (empty catalog)")?,
    }
    Ok(())
}
