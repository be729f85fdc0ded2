//! Maximum population from building, Homes and barren living space.

use serde::{Deserialize, Serialize};

use crate::buildings::{BuildingId, BARREN_POP_PER_ACRE};
use crate::province::Province;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LivingSpace {
    /// Per-building living space plus the Homes bonus.
    pub built: f64,
    pub homes_bonus: f64,
    pub barren: f64,
    pub race_multiplier: f64,
    pub max_population: f64,
}

/// Breakdown behind [`calculate_max_population`].
pub fn living_space(prov: &Province) -> LivingSpace {
    let completed = prov.buildings.total();
    let homes_bonus = prov.buildings.get(BuildingId::Homes) as f64
        * BuildingId::Homes.def().capacity.population;
    let built = prov
        .buildings
        .iter()
        .map(|(id, count)| count as f64 * id.def().living_space)
        .sum::<f64>()
        + homes_bonus;

    // Barren land is derived from the layout, not the stored field.
    let barren_acres = (prov.acres as u64).saturating_sub(completed);
    let barren = barren_acres as f64 * BARREN_POP_PER_ACRE;

    let race_multiplier = 1.0 + prov.race.def().mods.pop;

    LivingSpace {
        built,
        homes_bonus,
        barren,
        race_multiplier,
        max_population: (built + barren) * race_multiplier,
    }
}

pub fn calculate_max_population(prov: &Province) -> f64 {
    living_space(prov).max_population
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buildings::Buildings;
    use crate::races::Race;

    #[test]
    fn test_built_and_barren() {
        let prov = Province {
            acres: 100,
            buildings: Buildings::new()
                .with(BuildingId::Farms, 50)
                .with(BuildingId::Homes, 10),
            ..Default::default()
        };
        let space = living_space(&prov);
        // 60*25 + 10*10
        assert_eq!(space.built, 1600.0);
        assert_eq!(space.homes_bonus, 100.0);
        assert_eq!(space.barren, 40.0 * 15.0);
        assert_eq!(calculate_max_population(&prov), 2200.0);
    }

    #[test]
    fn test_halfling_bonus() {
        let prov = Province {
            race: Race::Halfling,
            acres: 100,
            buildings: Buildings::new().with(BuildingId::Banks, 100),
            ..Default::default()
        };
        assert!((calculate_max_population(&prov) - 2500.0 * 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_overbuilt_has_no_negative_barren() {
        let prov = Province {
            acres: 10,
            buildings: Buildings::new().with(BuildingId::Towers, 20),
            ..Default::default()
        };
        assert_eq!(living_space(&prov).barren, 0.0);
    }

    #[test]
    fn test_empty_province() {
        assert_eq!(calculate_max_population(&Province::default()), 0.0);
    }
}
