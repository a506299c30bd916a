//! `ldr plan` — group leveled courses into a term-by-term study plan.

use std::io::Write;
use std::path::Path;

use clap::Args;
use ladder_core::{LeveledCourse, order_required_first, split_by_level};
use serde::Serialize;

use crate::cmd::{Algorithm, level_error_details, load_catalog};
use crate::output::{OutputMode, render, render_error};
use crate::store::prune_unknown_prereqs;

/// Arguments for `ldr plan`.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Assignment algorithm to run.
    #[arg(long, value_enum, default_value_t = Algorithm::Topological)]
    pub algorithm: Algorithm,

    /// Drop prerequisite references to courses missing from the catalog
    /// before leveling.
    #[arg(long)]
    pub prune: bool,
}

#[derive(Debug, Serialize)]
struct Term {
    level: usize,
    credits: u32,
    courses: Vec<LeveledCourse>,
}

#[derive(Debug, Serialize)]
struct PlanOutput {
    algorithm: &'static str,
    pruned_refs: usize,
    terms: Vec<Term>,
}

/// Execute `ldr plan`.
pub fn run_plan(args: &PlanArgs, output: OutputMode, catalog_path: &Path) -> anyhow::Result<()> {
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
            anyhow::bail!("planning failed");
        }
    };

    let mut groups = split_by_level(leveled);
    order_required_first(&mut groups);

    let terms = groups
        .into_iter()
        .enumerate()
        .map(|(level, courses)| Term {
            level,
            credits: courses.iter().map(|c| c.course.credits).sum(),
            courses,
        })
        .collect();

    let payload = PlanOutput {
        algorithm: args.algorithm.name(),
        pruned_refs,
        terms,
    };

    render(output, &payload, |report, w| render_plan_human(report, w))
}

fn render_plan_human(payload: &PlanOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if payload.terms.is_empty() {
        writeln!(w, "No courses in catalog, nothing to plan.")?;
        return Ok(());
    }

    let total: usize = payload.terms.iter().map(|term| term.courses.len()).sum();
    writeln!(
        w,
        "Plan ({} terms, {} courses, {} assigner)",
        payload.terms.len(),
        total,
        payload.algorithm
    )?;
    if payload.pruned_refs > 0 {
        writeln!(
            w,
            "Pruned {} unknown prerequisite reference(s).",
            payload.pruned_refs
        )?;
    }

    for term in &payload.terms {
        writeln!(w)?;
        writeln!(
            w,
            "Term {} ({} courses, {} credits)",
            term.level,
            term.courses.len(),
            term.credits
        )?;
        for course in &term.courses {
            writeln!(
                w,
                "  {:>6}  {:>2}cr  {}{}",
                course.course.id,
                course.course.credits,
                course.course.name,
                if course.course.required {
                    ""
                } else {
                    " (elective)"
                }
            )?;
        }
    }
    Ok(())
}
