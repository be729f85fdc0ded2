//! Food balance per tick — Farm and barren-land production against
//! population consumption, with a one-tick stock look-ahead.

use serde::{Deserialize, Serialize};

use crate::buildings::{BuildingId, BARREN_FOOD_PER_ACRE};
use crate::constants::food::{CONSUMPTION_PER_POP, FARM_PRODUCTION};
use crate::efficiency::calculate_be;
use crate::province::Province;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodProduction {
    pub farms: f64,
    pub barren: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodResult {
    pub production: FoodProduction,
    pub population_consumption: f64,
    pub net_per_tick: f64,
    pub projected_next_stock: f64,
}

/// Bushels one Farm yields per tick at the given BE.
pub fn farm_yield(be: f64) -> f64 {
    match BuildingId::Farms.def().flat.food {
        Some(effect) => effect.total(1, be),
        None => FARM_PRODUCTION * be,
    }
}

pub fn calculate_food(prov: &Province) -> FoodResult {
    let be = calculate_be(prov).be;

    let farms = prov.buildings.get(BuildingId::Farms) as f64 * farm_yield(be);
    // Barren yield is flat, not BE-scaled.
    let barren = prov.barren_acres as f64 * BARREN_FOOD_PER_ACRE;
    let total = farms + barren;

    let population_consumption = prov.total_population() as f64 * CONSUMPTION_PER_POP;
    let net_per_tick = total - population_consumption;

    FoodResult {
        production: FoodProduction {
            farms,
            barren,
            total,
        },
        population_consumption,
        net_per_tick,
        projected_next_stock: prov.food + net_per_tick,
    }
}
