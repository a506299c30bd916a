//! `ldr stats` — catalog reporting dashboard.
//!
//! Structural counts always render; the level section degrades to "n/a"
//! when the catalog does not level (cycle, duplicate id, bad reference),
//! so stats stays usable while a catalog is being repaired.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use ladder_core::{assign_levels_topological, max_level, split_by_level};
use serde::Serialize;

use crate::cmd::load_catalog;
use crate::output::{OutputMode, render};

/// Report payload for `ldr stats`.
#[derive(Debug, Serialize)]
struct CatalogStats {
    courses: usize,
    required: usize,
    elective: usize,
    advanced: usize,
    total_credits: u32,
    must_edges: usize,
    recommend_edges: usize,
    by_domain: HashMap<String, usize>,
    max_level: Option<usize>,
    courses_per_level: Vec<usize>,
    credits_per_level: Vec<u32>,
}

/// Execute `ldr stats`.
pub fn run_stats(output: OutputMode, catalog_path: &Path) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path, output)?;

    let mut by_domain: HashMap<String, usize> = HashMap::new();
    for course in &catalog {
        *by_domain.entry(course.domain.clone()).or_insert(0) += 1;
    }

    let leveled = assign_levels_topological(&catalog).ok();
    let max = leveled.as_deref().and_then(|l| max_level(l).ok());
    let groups = leveled.map_or_else(Vec::new, split_by_level);
    let courses_per_level: Vec<usize> = groups.iter().map(Vec::len).collect();
    let credits_per_level: Vec<u32> = groups
        .iter()
        .map(|group| group.iter().map(|c| c.course.credits).sum())
        .collect();

    let required = catalog.iter().filter(|c| c.required).count();
    let payload = CatalogStats {
        courses: catalog.len(),
        required,
        elective: catalog.len() - required,
        advanced: catalog.iter().filter(|c| c.advanced).count(),
        total_credits: catalog.iter().map(|c| c.credits).sum(),
        must_edges: catalog.iter().map(|c| c.must_courses.len()).sum(),
        recommend_edges: catalog.iter().map(|c| c.recommend_courses.len()).sum(),
        by_domain,
        max_level: max,
        courses_per_level,
        credits_per_level,
    };

    render(output, &payload, |report, w| render_stats_human(report, w))
}

fn render_sorted_map(map: &HashMap<String, usize>) -> Vec<(&str, usize)> {
    let mut entries: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_unstable_by(|(ka, va), (kb, vb)| vb.cmp(va).then_with(|| ka.cmp(kb)));
    entries
}

fn render_stats_human(stats: &CatalogStats, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "Catalog reporting")?;

    writeln!(
        w,
        "\nCourses: {} ({} required, {} elective, {} advanced, {} credits)",
        stats.courses, stats.required, stats.elective, stats.advanced, stats.total_credits
    )?;

    writeln!(w, "\nPrerequisite edges:")?;
    writeln!(w, "  must:       {}", stats.must_edges)?;
    writeln!(w, "  recommend:  {}", stats.recommend_edges)?;

    writeln!(w, "\nCourses by domain:")?;
    for (domain, count) in render_sorted_map(&stats.by_domain) {
        writeln!(w, "  {domain}: {count}")?;
    }

    writeln!(w, "\nLevels:")?;
    match stats.max_level {
        Some(max) => {
            writeln!(w, "  max level: {max}")?;
            for (level, (courses, credits)) in stats
                .courses_per_level
                .iter()
                .zip(stats.credits_per_level.iter())
                .enumerate()
            {
                writeln!(w, "  level {level}: {courses} courses, {credits} credits")?;
            }
        }
        None => {
            writeln!(w, "  max level: n/a (catalog does not level)")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> CatalogStats {
        let mut by_domain = HashMap::new();
        by_domain.insert("systems".to_string(), 3);
        by_domain.insert("theory".to_string(), 1);
        CatalogStats {
            courses: 4,
            required: 2,
            elective: 2,
            advanced: 1,
            total_credits: 13,
            must_edges: 3,
            recommend_edges: 1,
            by_domain,
            max_level: Some(2),
            courses_per_level: vec![1, 2, 1],
            credits_per_level: vec![3, 6, 4],
        }
    }

    #[test]
    fn render_stats_human_sections() {
        let mut out = Vec::new();
        render_stats_human(&fixture(), &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("Courses: 4 (2 required, 2 elective, 1 advanced, 13 credits)"));
        assert!(rendered.contains("must:       3"));
        assert!(rendered.contains("systems: 3"));
        assert!(rendered.contains("max level: 2"));
        assert!(rendered.contains("level 1: 2 courses, 6 credits"));
    }

    #[test]
    fn render_stats_human_unlevelable_catalog() {
        let mut stats = fixture();
        stats.max_level = None;
        stats.courses_per_level = Vec::new();
        stats.credits_per_level = Vec::new();

        let mut out = Vec::new();
        render_stats_human(&stats, &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("max level: n/a (catalog does not level)"));
        assert!(!rendered.contains("level 0:"));
    }

    #[test]
    fn render_sorted_map_orders_by_count_then_name() {
        let mut map = HashMap::new();
        map.insert("b".to_string(), 2);
        map.insert("a".to_string(), 2);
        map.insert("c".to_string(), 5);

        assert_eq!(render_sorted_map(&map), vec![("c", 5), ("a", 2), ("b", 2)]);
    }
}
