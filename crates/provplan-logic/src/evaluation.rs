//! Layout evaluation — the metric bundle the build planner optimises.
//!
//! [`evaluate_layouts`] scores many candidate layouts for one province in
//! parallel; each evaluation is independent and pure.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buildings::Buildings;
use crate::efficiency::calculate_be;
use crate::food::calculate_food;
use crate::income::calculate_income;
use crate::military::calculate_military;
use crate::province::{clone_province_with_buildings, Province};
use crate::wages::calculate_wages;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildEvaluation {
    pub income: f64,
    pub wages: f64,
    pub net_income: f64,
    pub net_food_per_tick: f64,
    pub be: f64,
    pub mod_offense: f64,
    pub mod_defense: f64,
    pub tpa: f64,
    pub wpa: f64,
}

pub fn evaluate_province_build(prov: &Province) -> BuildEvaluation {
    let income = calculate_income(prov).final_income;
    let wages = calculate_wages(prov).total_wages;
    let military = calculate_military(prov);

    BuildEvaluation {
        income,
        wages,
        net_income: income - wages,
        net_food_per_tick: calculate_food(prov).net_per_tick,
        be: calculate_be(prov).be,
        mod_offense: military.mod_offense,
        mod_defense: military.mod_defense,
        tpa: prov.per_acre(prov.thieves),
        wpa: prov.per_acre(prov.wizards),
    }
}

/// Evaluate each candidate layout against `prov`. Output order matches input.
pub fn evaluate_layouts(prov: &Province, layouts: &[Buildings]) -> Vec<BuildEvaluation> {
    layouts
        .par_iter()
        .map(|layout| evaluate_province_build(&clone_province_with_buildings(prov, layout)))
        .collect()
}
