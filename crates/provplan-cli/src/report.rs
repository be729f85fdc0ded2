use std::io::Write;

use serde::Serialize;

use provplan_logic::planner::{BuildGoals, BuildPlan, BuildingChange};
use provplan_logic::province::Province;
use provplan_logic::summary::{MetricDelta, ProvinceSummary};

/// JSON body of `provplan plan --json`.
#[derive(Serialize)]
pub struct PlanReport<'a> {
    pub goals: &'a BuildGoals,
    pub plan: &'a BuildPlan,
    pub changes: &'a [BuildingChange],
}

/// Human-readable dashboard for one province.
pub fn print_summary(
    prov: &Province,
    summary: &ProvinceSummary,
    writer: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(writer, "\n=== {} ({}) ===", prov.name, prov.location)?;
    writeln!(
        writer,
        "{} {} | {} acres ({} built, {} barren)",
        prov.race, prov.personality, prov.acres, prov.built_acres, prov.barren_acres
    )?;
    writeln!(writer)?;

    let jobs = summary.be.jobs;
    writeln!(writer, "--- EFFICIENCY ---")?;
    writeln!(writer, "BE: {:.2}%", summary.be.be * 100.0)?;
    writeln!(
        writer,
        "Jobs: {} total, {} optimal, {} workers, {} unfilled ({:.1}% employed)",
        jobs.total_jobs,
        jobs.optimal_workers,
        jobs.available_workers,
        summary.jobs_unfilled,
        summary.employment_percent
    )?;
    writeln!(writer)?;

    writeln!(writer, "--- ECONOMY (per tick / per day) ---")?;
    writeln!(
        writer,
        "Income:     {:>12.1} / {:>12.1}",
        summary.income.final_income, summary.daily.income
    )?;
    writeln!(
        writer,
        "Wages:      {:>12.1} / {:>12.1}  (armouries -{:.1}%)",
        summary.wages.total_wages, summary.daily.wages, summary.wages.armouries_reduction
    )?;
    writeln!(
        writer,
        "Net income: {:>12.1} / {:>12.1}",
        summary.net_income, summary.daily.net_income
    )?;
    writeln!(
        writer,
        "Food:       {:>12.1} / {:>12.1}  (next tick stock {:.0})",
        summary.food.net_per_tick, summary.daily.food_net, summary.food.projected_next_stock
    )?;
    writeln!(
        writer,
        "Build cost: {:.1}/acre | Raze cost: {:.1}/acre",
        summary.build_cost_per_acre, summary.raze_cost_per_acre
    )?;
    writeln!(writer)?;

    let mil = summary.military;
    writeln!(writer, "--- MILITARY ---")?;
    writeln!(
        writer,
        "Offense: {:.0} raw x {:.3} OME = {:.0}  (TG {:.1}% of land)",
        mil.raw_offense, mil.ome, mil.mod_offense, mil.tg_percent
    )?;
    writeln!(
        writer,
        "Defense: {:.0} raw x {:.3} DME = {:.0}  (Forts {:.1}% of land)",
        mil.raw_defense, mil.dme, mil.mod_defense, mil.forts_percent
    )?;
    writeln!(writer)?;

    writeln!(writer, "--- POPULATION ---")?;
    writeln!(
        writer,
        "Total: {} / {:.0} max | Army: {} | Thieves: {} | Wizards: {}",
        summary.total_population,
        summary.max_population,
        summary.army_population,
        summary.thief_population,
        summary.wizard_population
    )?;
    writeln!(writer)?;

    writeln!(writer, "--- BUILDINGS ---")?;
    for (id, count) in prov.buildings.iter().filter(|&(_, count)| count > 0) {
        writeln!(
            writer,
            "{:<16} {:>6}  {:>5.1}%",
            id,
            count,
            prov.percent_of_land(count)
        )?;
    }
    Ok(())
}

pub fn print_plan(
    plan: &BuildPlan,
    changes: &[BuildingChange],
    deltas: &[MetricDelta],
    writer: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(writer, "\n=== Suggested Build ===")?;
    writeln!(
        writer,
        "Rebuilt {} of {} allowed acres",
        plan.rebuilt_acres, plan.max_rebuild_acres
    )?;
    writeln!(writer)?;

    if changes.is_empty() {
        writeln!(writer, "No changes suggested.")?;
    } else {
        writeln!(writer, "--- CHANGES ---")?;
        for change in changes {
            writeln!(
                writer,
                "{:<16} {:>6} -> {:>6}  ({:+})",
                change.building,
                change.before,
                change.after,
                change.delta()
            )?;
        }
    }
    writeln!(writer)?;

    if plan.required_extra_thieves > 0 || plan.required_extra_wizards > 0 {
        writeln!(writer, "--- STILL NEEDED ---")?;
        if plan.required_extra_thieves > 0 {
            writeln!(writer, "Thieves: {} more", plan.required_extra_thieves)?;
        }
        if plan.required_extra_wizards > 0 {
            writeln!(writer, "Wizards: {} more", plan.required_extra_wizards)?;
        }
        writeln!(writer)?;
    }

    print_deltas("Before", "After", deltas, writer)
}

pub fn print_compare(
    baseline: &str,
    current: &str,
    deltas: &[MetricDelta],
    writer: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(writer, "\n=== {} vs {} ===", baseline, current)?;
    print_deltas(baseline, current, deltas, writer)
}

fn print_deltas(
    left: &str,
    right: &str,
    deltas: &[MetricDelta],
    writer: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{:<22} {:>14} {:>14} {:>12} {:>9}",
        "Metric", left, right, "Delta", "%"
    )?;
    for d in deltas {
        let percent = match d.percent {
            Some(p) => format!("{:+.1}%", p),
            None => "-".to_string(),
        };
        let marker = if d.changed() { "*" } else { " " };
        writeln!(
            writer,
            "{}{:<21} {:>14.2} {:>14.2} {:>+12.2} {:>9}",
            marker, d.label, d.baseline, d.current, d.delta, percent
        )?;
    }
    Ok(())
}
