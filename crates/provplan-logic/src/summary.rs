//! Province summary — every calculator result plus the derived dashboard
//! figures, and a baseline-vs-current comparison of the headline metrics.

use serde::{Deserialize, Serialize};

use crate::constants::age::TICKS_PER_DAY;
use crate::constants::economy::{
    BUILD_COST_ACRE_OFFSET, BUILD_COST_FACTOR, RAZE_COST_BASE, RAZE_COST_FACTOR,
};
use crate::efficiency::{calculate_be, BeResult};
use crate::food::{calculate_food, FoodResult};
use crate::income::{calculate_income, IncomeResult};
use crate::military::{calculate_military, MilitaryResult};
use crate::population::calculate_max_population;
use crate::province::Province;
use crate::wages::{calculate_wages, WagesResult};

/// Deltas smaller than this count as unchanged.
const DELTA_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub income: f64,
    pub wages: f64,
    pub net_income: f64,
    pub food_produced: f64,
    pub food_consumed: f64,
    pub food_net: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProvinceSummary {
    pub be: BeResult,
    pub income: IncomeResult,
    pub wages: WagesResult,
    pub net_income: f64,
    pub food: FoodResult,
    pub military: MilitaryResult,
    pub max_population: f64,

    pub total_population: u64,
    pub army_population: u64,
    pub thief_population: u64,
    pub wizard_population: u64,

    pub jobs_unfilled: u64,
    /// Filled jobs over optimal workers; 100 when there are no jobs.
    pub employment_percent: f64,

    pub build_cost_per_acre: f64,
    pub raze_cost_per_acre: f64,

    pub daily: DailyTotals,
}

pub fn summarize_province(prov: &Province) -> ProvinceSummary {
    let be = calculate_be(prov);
    let income = calculate_income(prov);
    let wages = calculate_wages(prov);
    let food = calculate_food(prov);
    let military = calculate_military(prov);
    let net_income = income.final_income - wages.total_wages;

    let jobs = be.jobs;
    let employment_percent = if jobs.optimal_workers > 0 {
        jobs.filled_jobs as f64 / jobs.optimal_workers as f64 * 100.0
    } else {
        100.0
    };

    let acres = prov.acres as f64;

    ProvinceSummary {
        be,
        income,
        wages,
        net_income,
        food,
        military,
        max_population: calculate_max_population(prov),
        total_population: prov.total_population(),
        army_population: prov.army_population(),
        thief_population: prov.thieves,
        wizard_population: prov.wizards,
        jobs_unfilled: jobs.optimal_workers.saturating_sub(jobs.filled_jobs),
        employment_percent,
        build_cost_per_acre: BUILD_COST_FACTOR * (acres + BUILD_COST_ACRE_OFFSET),
        raze_cost_per_acre: RAZE_COST_BASE + RAZE_COST_FACTOR * acres,
        daily: DailyTotals {
            income: income.final_income * TICKS_PER_DAY,
            wages: wages.total_wages * TICKS_PER_DAY,
            net_income: net_income * TICKS_PER_DAY,
            food_produced: food.production.total * TICKS_PER_DAY,
            food_consumed: food.population_consumption * TICKS_PER_DAY,
            food_net: food.net_per_tick * TICKS_PER_DAY,
        },
    }
}

/// One headline metric compared between two summaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDelta {
    pub label: &'static str,
    pub baseline: f64,
    pub current: f64,
    pub delta: f64,
    /// `None` when the baseline is zero.
    pub percent: Option<f64>,
}

impl MetricDelta {
    fn new(label: &'static str, baseline: f64, current: f64) -> Self {
        let raw = current - baseline;
        let delta = if raw.abs() > DELTA_EPSILON { raw } else { 0.0 };
        let percent = if baseline != 0.0 {
            Some(delta / baseline * 100.0)
        } else {
            None
        };
        Self {
            label,
            baseline,
            current,
            delta,
            percent,
        }
    }

    pub fn changed(&self) -> bool {
        self.delta != 0.0
    }
}

/// Compare headline metrics, in dashboard order.
pub fn compare_summaries(baseline: &ProvinceSummary, current: &ProvinceSummary) -> Vec<MetricDelta> {
    let metrics: [(&'static str, fn(&ProvinceSummary) -> f64); 14] = [
        ("BE", |s| s.be.be),
        ("Employment %", |s| s.employment_percent),
        ("Income / tick", |s| s.income.final_income),
        ("Wages / tick", |s| s.wages.total_wages),
        ("Net income / tick", |s| s.net_income),
        ("Net income / day", |s| s.daily.net_income),
        ("Food produced / tick", |s| s.food.production.total),
        ("Net food / tick", |s| s.food.net_per_tick),
        ("Net food / day", |s| s.food.net_per_tick * TICKS_PER_DAY),
        ("OME", |s| s.military.ome),
        ("DME", |s| s.military.dme),
        ("Mod offense", |s| s.military.mod_offense),
        ("Mod defense", |s| s.military.mod_defense),
        ("Max population", |s| s.max_population),
    ];

    metrics
        .iter()
        .map(|&(label, get)| MetricDelta::new(label, get(baseline), get(current)))
        .collect()
}
