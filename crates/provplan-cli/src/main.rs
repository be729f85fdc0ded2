//! ProvPlan command-line harness.
//!
//! Loads province snapshots from JSON, prints the calculator dashboard,
//! suggests builds and compares two snapshots. Runs entirely in-process.
//!
//! Usage:
//!   provplan summary province.json
//!   provplan plan province.json --goals goals.json --focus offense
//!   provplan compare baseline.json current.json --json

mod report;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;

use provplan_logic::planner::{generate_suggested_build, BuildFocus, BuildGoals};
use provplan_logic::province::{clone_province_with_buildings, Province};
use provplan_logic::summary::{compare_summaries, summarize_province};

#[derive(Parser)]
#[command(name = "provplan")]
#[command(about = "Province economy calculator and build planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Treat snapshot validation problems as errors
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every calculator result for a province snapshot
    Summary {
        /// Path to the province JSON
        province: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest a rebuilt layout that meets the given goals
    Plan {
        /// Path to the province JSON
        province: PathBuf,

        /// Goals JSON; the flags below override its fields
        #[arg(short, long)]
        goals: Option<PathBuf>,

        /// Build focus
        #[arg(short, long, value_enum)]
        focus: Option<FocusArg>,

        /// Maximum percent of built land to rebuild
        #[arg(long)]
        max_rebuild: Option<f64>,

        /// Minimum net income per tick
        #[arg(long)]
        min_income: Option<f64>,

        /// Require non-negative net food per tick
        #[arg(long)]
        no_starvation: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare headline metrics between two snapshots
    Compare {
        /// Baseline province JSON
        baseline: PathBuf,

        /// Current province JSON
        current: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FocusArg {
    Income,
    Offense,
    Tm,
    Hybrid,
}

impl From<FocusArg> for BuildFocus {
    fn from(arg: FocusArg) -> Self {
        match arg {
            FocusArg::Income => BuildFocus::Income,
            FocusArg::Offense => BuildFocus::Offense,
            FocusArg::Tm => BuildFocus::Tm,
            FocusArg::Hybrid => BuildFocus::Hybrid,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Summary { province, json } => {
            let prov = load_province(&province, cli.strict)?;
            let summary = summarize_province(&prov);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                report::print_summary(&prov, &summary, &mut io::stdout().lock())?;
            }
        }

        Commands::Plan {
            province,
            goals,
            focus,
            max_rebuild,
            min_income,
            no_starvation,
            json,
        } => {
            let prov = load_province(&province, cli.strict)?;
            let mut goals: BuildGoals = match goals {
                Some(path) => load_json(&path)?,
                None => BuildGoals::default(),
            };
            if let Some(focus) = focus {
                goals.focus = focus.into();
            }
            if max_rebuild.is_some() {
                goals.max_rebuild_percent = max_rebuild;
            }
            if min_income.is_some() {
                goals.min_net_income = min_income;
            }
            goals.no_starvation |= no_starvation;
            log::debug!("Goals: {:?}", goals);

            let plan = generate_suggested_build(&prov, &goals);
            let changes = plan.changes(&prov.buildings);
            log::info!(
                "Plan rebuilds {} of {} allowed acres across {} building types",
                plan.rebuilt_acres,
                plan.max_rebuild_acres,
                changes.len()
            );

            if json {
                let out = report::PlanReport {
                    goals: &goals,
                    plan: &plan,
                    changes: &changes,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                let before = summarize_province(&prov);
                let after =
                    summarize_province(&clone_province_with_buildings(&prov, &plan.buildings));
                let deltas = compare_summaries(&before, &after);
                report::print_plan(&plan, &changes, &deltas, &mut io::stdout().lock())?;
            }
        }

        Commands::Compare {
            baseline,
            current,
            json,
        } => {
            let base = load_province(&baseline, cli.strict)?;
            let cur = load_province(&current, cli.strict)?;
            let deltas = compare_summaries(&summarize_province(&base), &summarize_province(&cur));
            if json {
                println!("{}", serde_json::to_string_pretty(&deltas)?);
            } else {
                report::print_compare(&base.name, &cur.name, &deltas, &mut io::stdout().lock())?;
            }
        }
    }

    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Load a snapshot and report validation problems. Problems are warnings
/// unless `strict` is set.
fn load_province(path: &Path, strict: bool) -> Result<Province> {
    log::info!("Loading province: {}", path.display());
    let prov: Province = load_json(path)?;

    let problems = prov.validate();
    for problem in &problems {
        log::warn!("{}: {}", path.display(), problem);
    }
    if strict && !problems.is_empty() {
        bail!(
            "{} failed validation with {} problem(s)",
            path.display(),
            problems.len()
        );
    }

    log::debug!(
        "Loaded {} ({} {}), {} acres",
        prov.name,
        prov.race,
        prov.personality,
        prov.acres
    );
    Ok(prov)
}
