//! Military strength — raw unit offense/defense and the building, race and
//! personality multipliers (OME/DME) applied to them.

use serde::{Deserialize, Serialize};

use crate::buildings::BuildingId;
use crate::constants::military::PERCENT_PER_LAND_PERCENT;
use crate::efficiency::calculate_be;
use crate::province::Province;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilitaryResult {
    pub raw_offense: f64,
    pub raw_defense: f64,
    /// Training Grounds share of land, in percent.
    pub tg_percent: f64,
    /// Forts share of land, in percent.
    pub forts_percent: f64,
    pub ome: f64,
    pub dme: f64,
    pub mod_offense: f64,
    pub mod_defense: f64,
}

pub fn calculate_military(prov: &Province) -> MilitaryResult {
    let race = prov.race.def();
    let units = &race.units;

    let raw_offense = prov.soldiers as f64 * units.soldier.off
        + prov.off_specs as f64 * units.off_spec.off
        + prov.elites as f64 * units.elite.off;
    let raw_defense = prov.soldiers as f64 * units.soldier.def
        + prov.def_specs as f64 * units.def_spec.def
        + prov.elites as f64 * units.elite.def;

    let tg_percent = prov.percent_of_land(prov.buildings.get(BuildingId::TrainingGrounds));
    let forts_percent = prov.percent_of_land(prov.buildings.get(BuildingId::Forts));

    let be = calculate_be(prov).be;
    let ome_bonus = tg_percent * PERCENT_PER_LAND_PERCENT * be / 100.0;
    let dme_bonus = forts_percent * PERCENT_PER_LAND_PERCENT * be / 100.0;

    let ome = (1.0 + ome_bonus) * (1.0 + race.mods.ome) * (1.0 + prov.personality.def().mods.ome);
    // Race and personality do not modify DME.
    let dme = 1.0 + dme_bonus;

    MilitaryResult {
        raw_offense,
        raw_defense,
        tg_percent,
        forts_percent,
        ome,
        dme,
        mod_offense: raw_offense * ome,
        mod_defense: raw_defense * dme,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buildings::Buildings;
    use crate::personalities::Personality;
    use crate::races::Race;

    fn army(race: Race, personality: Personality) -> Province {
        Province {
            race,
            personality,
            soldiers: 100,
            off_specs: 50,
            def_specs: 40,
            elites: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_raw_strength_human() {
        let result = calculate_military(&army(Race::Human, Personality::Paladin));
        // 100*3 + 50*13 + 10*7
        assert_eq!(result.raw_offense, 1020.0);
        // 100*0 + 40*10 + 10*12
        assert_eq!(result.raw_defense, 520.0);
    }

    #[test]
    fn test_undead_soldiers_defend() {
        let result = calculate_military(&army(Race::Undead, Personality::Paladin));
        assert_eq!(result.raw_defense, 100.0 * 3.0 + 40.0 * 10.0 + 10.0 * 4.0);
    }

    #[test]
    fn test_zero_acres_multipliers() {
        let result = calculate_military(&army(Race::DarkElf, Personality::Warrior));
        assert_eq!(result.tg_percent, 0.0);
        assert_eq!(result.forts_percent, 0.0);
        assert!(result.ome.is_finite());
        assert!((result.ome - 1.10 * 1.15).abs() < 1e-12);
        assert_eq!(result.dme, 1.0);
    }

    #[test]
    fn test_training_grounds_and_forts() {
        let mut prov = army(Race::Human, Personality::Paladin);
        prov.acres = 100;
        prov.buildings = Buildings::new()
            .with(BuildingId::TrainingGrounds, 10)
            .with(BuildingId::Forts, 20);
        prov.peasants = 10_000;
        prov.sync_land();
        let result = calculate_military(&prov);
        assert!((result.tg_percent - 10.0).abs() < 1e-12);
        assert!((result.ome - 1.15).abs() < 1e-12);
        assert!((result.dme - 1.30).abs() < 1e-12);
        assert!((result.mod_offense - 1020.0 * 1.15).abs() < 1e-9);
        assert!((result.mod_defense - 520.0 * 1.30).abs() < 1e-9);
    }
}
