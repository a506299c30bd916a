#![forbid(unsafe_code)]

mod cmd;
mod output;
mod store;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ladder: course catalog leveling and planning",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Path to the course catalog file.
    #[arg(long, global = true, default_value = "catalog.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Leveling",
        about = "Assign a level to every course",
        long_about = "Assign each course the earliest level its prerequisites allow.",
        after_help = "EXAMPLES:\n    # Level the default catalog.json\n    ldr levels\n\n    # Use the wavefront assigner\n    ldr levels --algorithm wavefront\n\n    # Emit machine-readable output\n    ldr levels --json"
    )]
    Levels(cmd::levels::LevelsArgs),

    #[command(
        next_help_heading = "Leveling",
        about = "Group courses into a term-by-term plan",
        long_about = "Level the catalog and group courses into terms, required courses first.",
        after_help = "EXAMPLES:\n    # Plan from the default catalog.json\n    ldr plan\n\n    # Drop references to unknown prerequisites first\n    ldr plan --prune\n\n    # Emit machine-readable output\n    ldr plan --json"
    )]
    Plan(cmd::plan::PlanArgs),

    #[command(
        next_help_heading = "Validation",
        about = "Validate the catalog",
        long_about = "Validate the catalog and exit non-zero on duplicate ids, unknown prerequisites, or prerequisite cycles.",
        after_help = "EXAMPLES:\n    # Check the default catalog.json\n    ldr check\n\n    # Check an alternate catalog\n    ldr check --catalog curriculum.json\n\n    # Emit machine-readable output\n    ldr check --json"
    )]
    Check,

    #[command(
        next_help_heading = "Reporting",
        about = "Catalog reporting dashboard",
        long_about = "Report course, edge, domain, and per-level counts for the catalog.",
        after_help = "EXAMPLES:\n    # Report on the default catalog.json\n    ldr stats\n\n    # Emit machine-readable output\n    ldr stats --json"
    )]
    Stats,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("LADDER_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "ladder=debug,info"
        } else {
            "ladder=info,warn"
        })
    });

    let format = env::var("LADDER_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();

    match cli.command {
        Commands::Levels(ref args) => cmd::levels::run_levels(args, output, &cli.catalog),
        Commands::Plan(ref args) => cmd::plan::run_plan(args, output, &cli.catalog),
        Commands::Check => cmd::check::run_check(output, &cli.catalog),
        Commands::Stats => cmd::stats::run_stats(output, &cli.catalog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_sets_output_mode() {
        let cli = Cli::parse_from(["ldr", "--json", "levels"]);
        assert!(cli.json);
        assert!(cli.output_mode().is_json());
    }

    #[test]
    fn json_flag_after_subcommand() {
        let cli = Cli::parse_from(["ldr", "levels", "--json"]);
        assert!(cli.json);
        assert!(cli.output_mode().is_json());
    }

    #[test]
    fn default_output_is_human() {
        let cli = Cli::parse_from(["ldr", "levels"]);
        assert!(!cli.json);
        assert!(!cli.output_mode().is_json());
    }

    #[test]
    fn catalog_defaults_to_catalog_json() {
        let cli = Cli::parse_from(["ldr", "check"]);
        assert_eq!(cli.catalog, PathBuf::from("catalog.json"));
    }

    #[test]
    fn catalog_flag_parses_after_subcommand() {
        let cli = Cli::parse_from(["ldr", "check", "--catalog", "curriculum.json"]);
        assert_eq!(cli.catalog, PathBuf::from("curriculum.json"));
    }

    #[test]
    fn verbose_flag_parsed() {
        let cli = Cli::parse_from(["ldr", "-v", "stats"]);
        assert!(cli.verbose);
    }

    #[test]
    fn levels_subcommand_parses_algorithm() {
        let cli = Cli::parse_from(["ldr", "levels", "--algorithm", "wavefront"]);
        assert!(matches!(cli.command, Commands::Levels(_)));
    }

    #[test]
    fn plan_subcommand_parses_prune() {
        let cli = Cli::parse_from(["ldr", "plan", "--prune"]);
        match cli.command {
            Commands::Plan(args) => assert!(args.prune),
            _ => panic!("expected plan subcommand"),
        }
    }

    #[test]
    fn stats_subcommand_parses() {
        let cli = Cli::parse_from(["ldr", "stats"]);
        assert!(matches!(cli.command, Commands::Stats));
    }
}
