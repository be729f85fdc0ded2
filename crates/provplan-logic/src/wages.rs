//! Military wages per tick.
//!
//! total = base × wage rate × (1 + race wage mod) × Armouries multiplier,
//! applied in that order.

use serde::{Deserialize, Serialize};

use crate::buildings::BuildingId;
use crate::constants::wages::{DEF_SPEC, ELITE, OFF_SPEC, SOLDIER};
use crate::efficiency::calculate_be;
use crate::province::Province;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitWages {
    pub soldiers: f64,
    pub off_specs: f64,
    pub def_specs: f64,
    pub elites: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WagesResult {
    pub unit_wages: UnitWages,
    /// Sum at 100% wages.
    pub base_wages: f64,
    pub wage_rate: f64,
    pub race_wage_multiplier: f64,
    /// Armouries discount in percent.
    pub armouries_reduction: f64,
    pub armouries_multiplier: f64,
    pub total_wages: f64,
}

/// Armouries wage discount in percent, capped by the rule table.
pub fn armouries_reduction(prov: &Province, be: f64) -> f64 {
    let percent = prov.percent_of_land(prov.buildings.get(BuildingId::Armouries));
    match BuildingId::Armouries.def().percent.wages {
        Some(effect) => effect.bonus(percent, be),
        None => 0.0,
    }
}

pub fn calculate_wages(prov: &Province) -> WagesResult {
    let unit_wages = UnitWages {
        soldiers: prov.soldiers as f64 * SOLDIER,
        off_specs: prov.off_specs as f64 * OFF_SPEC,
        def_specs: prov.def_specs as f64 * DEF_SPEC,
        elites: prov.elites as f64 * ELITE,
    };
    let base_wages =
        unit_wages.soldiers + unit_wages.off_specs + unit_wages.def_specs + unit_wages.elites;

    let be = calculate_be(prov).be;
    let race_wage_multiplier = 1.0 + prov.race.def().mods.wages;
    let armouries_reduction = armouries_reduction(prov, be);
    let armouries_multiplier = 1.0 - armouries_reduction / 100.0;

    let total_wages = base_wages * prov.wage_rate * race_wage_multiplier * armouries_multiplier;

    WagesResult {
        unit_wages,
        base_wages,
        wage_rate: prov.wage_rate,
        race_wage_multiplier,
        armouries_reduction,
        armouries_multiplier,
        total_wages,
    }
}
