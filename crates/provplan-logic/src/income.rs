//! Gold income per tick from peasant employment, prisoners and Banks.

use serde::{Deserialize, Serialize};

use crate::buildings::BuildingId;
use crate::constants::economy::{
    GC_PER_BANK_FLAT, GC_PER_EMPLOYED_PEASANT, GC_PER_PRISONER, GC_PER_UNEMPLOYED_PEASANT,
};
use crate::constants::jobs::PER_COMPLETED_BUILDING;
use crate::efficiency::calculate_be;
use crate::province::Province;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Employment {
    pub available_jobs: u64,
    pub prisoner_workers: u64,
    pub employed_peasants: u64,
    pub unemployed_peasants: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawIncome {
    /// Employed plus unemployed peasant gold.
    pub peasants: f64,
    /// Bank flat gold, already BE-scaled.
    pub banks_flat: f64,
    pub prisoners: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeResult {
    pub employment: Employment,
    pub raw: RawIncome,
    pub race_income_multiplier: f64,
    pub be: f64,
    pub final_income: f64,
}

/// Peasants fill jobs left after prisoners take theirs; the rest earn the
/// unemployed rate.
pub fn employment(prov: &Province) -> Employment {
    let completed = prov.buildings.total();
    let homes = prov.buildings.get(BuildingId::Homes) as u64;
    let available_jobs = completed.saturating_sub(homes) * PER_COMPLETED_BUILDING;
    let prisoner_workers = prov.prisoners / 2;
    let employed_peasants = prov
        .peasants
        .min(available_jobs.saturating_sub(prisoner_workers));

    Employment {
        available_jobs,
        prisoner_workers,
        employed_peasants,
        unemployed_peasants: prov.peasants - employed_peasants,
    }
}

pub fn calculate_income(prov: &Province) -> IncomeResult {
    let be = calculate_be(prov).be;
    let employment = employment(prov);

    let peasants = employment.employed_peasants as f64 * GC_PER_EMPLOYED_PEASANT
        + employment.unemployed_peasants as f64 * GC_PER_UNEMPLOYED_PEASANT;
    let prisoners = prov.prisoners as f64 * GC_PER_PRISONER;
    let banks_flat = prov.buildings.get(BuildingId::Banks) as f64 * GC_PER_BANK_FLAT * be;

    let raw_income = peasants + prisoners + banks_flat;
    let race_income_multiplier = 1.0 + prov.race.def().mods.income;

    IncomeResult {
        employment,
        raw: RawIncome {
            peasants,
            banks_flat,
            prisoners,
        },
        race_income_multiplier,
        be,
        final_income: raw_income * race_income_multiplier,
    }
}
