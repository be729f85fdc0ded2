//! Province snapshot — the single input every calculator reads.
//!
//! A `Province` comes from the UI form or an intel import. Calculators take
//! it by reference and never keep it; the planner works on a clone with a
//! different [`Buildings`] layout (see [`clone_province_with_buildings`]).
//!
//! ```
//! use provplan_logic::buildings::{BuildingId, Buildings};
//! use provplan_logic::province::{clone_province_with_buildings, Province};
//!
//! let prov = Province { acres: 100, ..Default::default() };
//! let layout = Buildings::new().with(BuildingId::Farms, 60);
//! let next = clone_province_with_buildings(&prov, &layout);
//! assert_eq!(next.built_acres, 60);
//! assert_eq!(next.barren_acres, 40);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buildings::Buildings;
use crate::personalities::Personality;
use crate::races::Race;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Province {
    pub name: String,
    pub race: Race,
    pub personality: Personality,
    /// Kingdom coordinates, e.g. "4:4".
    pub location: String,
    pub ruler_name: String,
    pub honor_level: u32,

    pub acres: u32,
    pub built_acres: u32,
    pub barren_acres: u32,

    pub peasants: u64,
    pub soldiers: u64,
    pub off_specs: u64,
    pub def_specs: u64,
    pub elites: u64,
    pub thieves: u64,
    pub wizards: u64,

    pub buildings: Buildings,

    pub gold: f64,
    /// 1.0 = 100% wages.
    pub wage_rate: f64,
    /// Stored bushels.
    pub food: f64,
    pub runes: f64,
    pub horses: f64,
    pub prisoners: u64,
    pub networth: f64,
    pub trade_balance: f64,
    pub training_credits: f64,
    pub building_credits: f64,

    // Intel-only fields, not read by the calculators.
    pub intel_offense_home: f64,
    pub intel_defense_home: f64,
    pub intel_wage_percent: f64,
    pub draft_target_percent: f64,
}

impl Default for Province {
    fn default() -> Self {
        Self {
            name: "Province".to_string(),
            race: Race::Human,
            personality: Personality::Paladin,
            location: "0:0".to_string(),
            ruler_name: String::new(),
            honor_level: 0,
            acres: 0,
            built_acres: 0,
            barren_acres: 0,
            peasants: 0,
            soldiers: 0,
            off_specs: 0,
            def_specs: 0,
            elites: 0,
            thieves: 0,
            wizards: 0,
            buildings: Buildings::default(),
            gold: 0.0,
            wage_rate: 1.0,
            food: 0.0,
            runes: 0.0,
            horses: 0.0,
            prisoners: 0,
            networth: 0.0,
            trade_balance: 0.0,
            training_credits: 0.0,
            building_credits: 0.0,
            intel_offense_home: 0.0,
            intel_defense_home: 0.0,
            intel_wage_percent: 100.0,
            draft_target_percent: 60.0,
        }
    }
}

impl Province {
    /// All seven population categories.
    pub fn total_population(&self) -> u64 {
        self.peasants
            + self.soldiers
            + self.off_specs
            + self.def_specs
            + self.elites
            + self.thieves
            + self.wizards
    }

    /// Soldiers, specialists and elites.
    pub fn army_population(&self) -> u64 {
        self.soldiers + self.off_specs + self.def_specs + self.elites
    }

    /// Share of total land covered by `count` acres, in percent. Zero when
    /// the province has no land.
    pub fn percent_of_land(&self, count: u32) -> f64 {
        if self.acres == 0 {
            0.0
        } else {
            count as f64 / self.acres as f64 * 100.0
        }
    }

    /// Units per acre, zero when the province has no land.
    pub fn per_acre(&self, units: u64) -> f64 {
        if self.acres == 0 {
            0.0
        } else {
            units as f64 / self.acres as f64
        }
    }

    /// Recompute `built_acres`/`barren_acres` from the current layout.
    pub fn sync_land(&mut self) {
        self.built_acres = u32::try_from(self.buildings.total()).unwrap_or(u32::MAX);
        self.barren_acres = self.acres.saturating_sub(self.built_acres);
    }

    /// Check the snapshot for inconsistencies, returning every problem found.
    ///
    /// The calculators never call this; they accept any snapshot.
    pub fn validate(&self) -> Vec<ProvinceError> {
        let mut errors = Vec::new();

        let built = self.buildings.total();
        if built > self.acres as u64 {
            errors.push(ProvinceError::OverBuilt {
                built,
                acres: self.acres,
            });
        }
        if self.built_acres as u64 + self.barren_acres as u64 != self.acres as u64 {
            errors.push(ProvinceError::LandMismatch {
                built: self.built_acres,
                barren: self.barren_acres,
                acres: self.acres,
            });
        }
        if !self.wage_rate.is_finite() || self.wage_rate < 0.0 {
            errors.push(ProvinceError::InvalidWageRate(self.wage_rate));
        }

        let resources = [
            ("gold", self.gold),
            ("food", self.food),
            ("runes", self.runes),
            ("horses", self.horses),
            ("networth", self.networth),
            ("trade_balance", self.trade_balance),
        ];
        for (name, value) in resources {
            if !value.is_finite() {
                errors.push(ProvinceError::NonFiniteResource(name));
            }
        }

        errors
    }
}

/// Snapshot consistency problem reported by [`Province::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProvinceError {
    #[error("built ({built}) + barren ({barren}) acres do not add up to {acres}")]
    LandMismatch { built: u32, barren: u32, acres: u32 },
    #[error("{built} acres of buildings exceed {acres} acres of land")]
    OverBuilt { built: u64, acres: u32 },
    #[error("wage rate {0} is not a non-negative number")]
    InvalidWageRate(f64),
    #[error("resource `{0}` is not a finite number")]
    NonFiniteResource(&'static str),
}

/// A copy of `prov` with a different layout and land totals recomputed.
pub fn clone_province_with_buildings(prov: &Province, buildings: &Buildings) -> Province {
    let mut out = Province {
        buildings: *buildings,
        ..prov.clone()
    };
    out.sync_land();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buildings::BuildingId;

    fn farm_province() -> Province {
        let mut prov = Province {
            acres: 1000,
            buildings: Buildings::new().with(BuildingId::Farms, 1000),
            peasants: 500,
            ..Default::default()
        };
        prov.sync_land();
        prov
    }

    #[test]
    fn test_default_template() {
        let prov = Province::default();
        assert_eq!(prov.race, Race::Human);
        assert_eq!(prov.personality, Personality::Paladin);
        assert_eq!(prov.wage_rate, 1.0);
        assert_eq!(prov.intel_wage_percent, 100.0);
        assert_eq!(prov.draft_target_percent, 60.0);
        assert!(prov.validate().is_empty());
    }

    #[test]
    fn test_clone_recomputes_land() {
        let prov = farm_province();
        let layout = Buildings::new()
            .with(BuildingId::Farms, 600)
            .with(BuildingId::Banks, 100);
        let next = clone_province_with_buildings(&prov, &layout);
        assert_eq!(next.built_acres, 700);
        assert_eq!(next.barren_acres, 300);
        assert_eq!(next.peasants, 500);
        // Original untouched
        assert_eq!(prov.buildings.get(BuildingId::Farms), 1000);
        assert_eq!(prov.built_acres, 1000);
    }

    #[test]
    fn test_clone_overbuilt_clamps_barren() {
        let prov = Province {
            acres: 10,
            ..Default::default()
        };
        let next = clone_province_with_buildings(&prov, &Buildings::new().with(BuildingId::Homes, 15));
        assert_eq!(next.built_acres, 15);
        assert_eq!(next.barren_acres, 0);
    }

    #[test]
    fn test_validate_land_mismatch() {
        let mut prov = farm_province();
        prov.barren_acres = 5;
        let errors = prov.validate();
        assert_eq!(
            errors,
            vec![ProvinceError::LandMismatch {
                built: 1000,
                barren: 5,
                acres: 1000
            }]
        );
    }

    #[test]
    fn test_validate_overbuilt_and_wage() {
        let mut prov = farm_province();
        prov.acres = 900;
        prov.barren_acres = 0;
        prov.built_acres = 900;
        prov.wage_rate = -0.5;
        let errors = prov.validate();
        assert!(errors.contains(&ProvinceError::OverBuilt {
            built: 1000,
            acres: 900
        }));
        assert!(errors.contains(&ProvinceError::InvalidWageRate(-0.5)));
    }

    #[test]
    fn test_validate_non_finite() {
        let mut prov = farm_province();
        prov.gold = f64::NAN;
        assert_eq!(prov.validate(), vec![ProvinceError::NonFiniteResource("gold")]);
    }

    #[test]
    fn test_percent_of_land_zero_acres() {
        let prov = Province::default();
        assert_eq!(prov.percent_of_land(50), 0.0);
        assert_eq!(prov.per_acre(50), 0.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"race":"ELF","acres":250,"buildings":{"GUILDS":25}}"#;
        let prov: Province = serde_json::from_str(json).unwrap();
        assert_eq!(prov.race, Race::Elf);
        assert_eq!(prov.personality, Personality::Paladin);
        assert_eq!(prov.buildings.get(BuildingId::Guilds), 25);
        assert_eq!(prov.wage_rate, 1.0);
    }
}
