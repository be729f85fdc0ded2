//! Building definitions — the 18 building types and their rule-table entries.
//!
//! A province's layout is a [`Buildings`] value: a dense per-type acre count
//! indexed by [`BuildingId`]. Absent entries in serialized form read as zero.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Living space per barren acre.
pub const BARREN_POP_PER_ACRE: f64 = 15.0;
/// Bushels per barren acre per tick, never scaled by BE.
pub const BARREN_FOOD_PER_ACRE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum BuildingId {
    Homes = 0,
    Farms = 1,
    Mills = 2,
    Banks = 3,
    TrainingGrounds = 4,
    Armouries = 5,
    Barracks = 6,
    Forts = 7,
    Castles = 8,
    Hospitals = 9,
    Guilds = 10,
    Towers = 11,
    ThievesDens = 12,
    WatchTowers = 13,
    Universities = 14,
    Libraries = 15,
    Stables = 16,
    Dungeons = 17,
}

impl BuildingId {
    pub const COUNT: usize = 18;

    pub const ALL: [BuildingId; Self::COUNT] = [
        Self::Homes,
        Self::Farms,
        Self::Mills,
        Self::Banks,
        Self::TrainingGrounds,
        Self::Armouries,
        Self::Barracks,
        Self::Forts,
        Self::Castles,
        Self::Hospitals,
        Self::Guilds,
        Self::Towers,
        Self::ThievesDens,
        Self::WatchTowers,
        Self::Universities,
        Self::Libraries,
        Self::Stables,
        Self::Dungeons,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Rule-table entry for this building type.
    pub fn def(self) -> &'static BuildingDef {
        &BUILDING_DEFS[self.index()]
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.def().display)
    }
}

/// A fixed per-building production, e.g. 60 bushels per Farm per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatEffect {
    pub per_building_per_tick: f64,
    pub affected_by_be: bool,
}

impl FlatEffect {
    /// Production of `count` buildings at the given BE.
    pub fn total(&self, count: u32, be: f64) -> f64 {
        let scale = if self.affected_by_be { be } else { 1.0 };
        count as f64 * self.per_building_per_tick * scale
    }
}

/// A bonus proportional to the share of land covered, capped at `max`.
///
/// `base` is the bonus (in percent) granted per 1% of land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentEffect {
    pub base: f64,
    pub max: f64,
    pub affected_by_be: bool,
}

impl PercentEffect {
    /// Bonus in percent for a building covering `percent_of_land` percent.
    pub fn bonus(&self, percent_of_land: f64, be: f64) -> f64 {
        let scale = if self.affected_by_be { be } else { 1.0 };
        (percent_of_land * self.base * scale).min(self.max)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BuildingCapacity {
    pub population: f64,
    pub horses: f64,
    pub prisoners: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlatEffects {
    pub peasants: Option<FlatEffect>,
    pub food: Option<FlatEffect>,
    pub gold: Option<FlatEffect>,
    pub wizards: Option<FlatEffect>,
    pub runes: Option<FlatEffect>,
    pub horses: Option<FlatEffect>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PercentEffects {
    pub income: Option<PercentEffect>,
    pub build_cost: Option<PercentEffect>,
    pub explore_gold_cost: Option<PercentEffect>,
    pub explore_soldier_cost: Option<PercentEffect>,
    pub ome: Option<PercentEffect>,
    pub train_time: Option<PercentEffect>,
    pub draft_cost: Option<PercentEffect>,
    pub wages: Option<PercentEffect>,
    pub train_cost: Option<PercentEffect>,
    pub attack_time: Option<PercentEffect>,
    pub merc_cost: Option<PercentEffect>,
    pub dme: Option<PercentEffect>,
    pub resource_loss: Option<PercentEffect>,
    pub honor_loss: Option<PercentEffect>,
    pub military_losses: Option<PercentEffect>,
    pub plague_cure: Option<PercentEffect>,
    pub birth_rate: Option<PercentEffect>,
    pub thief_losses: Option<PercentEffect>,
    pub tpa_bonus: Option<PercentEffect>,
    pub catch_thieves: Option<PercentEffect>,
    pub thief_damage_reduction: Option<PercentEffect>,
    pub scientist_spawn: Option<PercentEffect>,
    pub book_gen: Option<PercentEffect>,
    pub science_eff: Option<PercentEffect>,
}

/// Static definition of one building type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingDef {
    pub id: BuildingId,
    pub display: &'static str,
    /// Base living space per acre. Homes' extra room is in `capacity.population`.
    pub living_space: f64,
    pub jobs: u64,
    pub capacity: BuildingCapacity,
    pub flat: FlatEffects,
    pub percent: PercentEffects,
}

const NO_CAPACITY: BuildingCapacity = BuildingCapacity {
    population: 0.0,
    horses: 0.0,
    prisoners: 0.0,
};

const NO_FLAT: FlatEffects = FlatEffects {
    peasants: None,
    food: None,
    gold: None,
    wizards: None,
    runes: None,
    horses: None,
};

const NO_PERCENT: PercentEffects = PercentEffects {
    income: None,
    build_cost: None,
    explore_gold_cost: None,
    explore_soldier_cost: None,
    ome: None,
    train_time: None,
    draft_cost: None,
    wages: None,
    train_cost: None,
    attack_time: None,
    merc_cost: None,
    dme: None,
    resource_loss: None,
    honor_loss: None,
    military_losses: None,
    plague_cure: None,
    birth_rate: None,
    thief_losses: None,
    tpa_bonus: None,
    catch_thieves: None,
    thief_damage_reduction: None,
    scientist_spawn: None,
    book_gen: None,
    science_eff: None,
};

const fn flat(per_building_per_tick: f64, affected_by_be: bool) -> Option<FlatEffect> {
    Some(FlatEffect {
        per_building_per_tick,
        affected_by_be,
    })
}

const fn pct(base: f64, max: f64, affected_by_be: bool) -> Option<PercentEffect> {
    Some(PercentEffect {
        base,
        max,
        affected_by_be,
    })
}

const fn standard(id: BuildingId, display: &'static str) -> BuildingDef {
    BuildingDef {
        id,
        display,
        living_space: 25.0,
        jobs: 25,
        capacity: NO_CAPACITY,
        flat: NO_FLAT,
        percent: NO_PERCENT,
    }
}

// Indexed by `BuildingId as usize`; order must match the enum.
static BUILDING_DEFS: [BuildingDef; BuildingId::COUNT] = [
    BuildingDef {
        jobs: 0,
        capacity: BuildingCapacity {
            population: 10.0,
            ..NO_CAPACITY
        },
        flat: FlatEffects {
            peasants: flat(0.3, false),
            ..NO_FLAT
        },
        ..standard(BuildingId::Homes, "Homes")
    },
    BuildingDef {
        flat: FlatEffects {
            food: flat(60.0, true),
            ..NO_FLAT
        },
        ..standard(BuildingId::Farms, "Farms")
    },
    BuildingDef {
        percent: PercentEffects {
            build_cost: pct(4.0, 100.0, true),
            explore_gold_cost: pct(3.0, 75.0, true),
            explore_soldier_cost: pct(2.0, 50.0, true),
            ..NO_PERCENT
        },
        ..standard(BuildingId::Mills, "Mills")
    },
    BuildingDef {
        flat: FlatEffects {
            gold: flat(25.0, true),
            ..NO_FLAT
        },
        percent: PercentEffects {
            income: pct(1.5, 37.5, true),
            ..NO_PERCENT
        },
        ..standard(BuildingId::Banks, "Banks")
    },
    BuildingDef {
        percent: PercentEffects {
            ome: pct(1.5, 37.5, true),
            train_time: pct(1.0, 25.0, true),
            ..NO_PERCENT
        },
        ..standard(BuildingId::TrainingGrounds, "Training Grounds")
    },
    BuildingDef {
        percent: PercentEffects {
            draft_cost: pct(2.0, 50.0, true),
            wages: pct(2.0, 50.0, true),
            train_cost: pct(1.5, 37.5, true),
            ..NO_PERCENT
        },
        ..standard(BuildingId::Armouries, "Armouries")
    },
    BuildingDef {
        percent: PercentEffects {
            attack_time: pct(1.5, 37.5, true),
            merc_cost: pct(2.0, 50.0, true),
            ..NO_PERCENT
        },
        ..standard(BuildingId::Barracks, "Military Barracks")
    },
    BuildingDef {
        percent: PercentEffects {
            dme: pct(1.5, 37.5, true),
            ..NO_PERCENT
        },
        ..standard(BuildingId::Forts, "Forts")
    },
    BuildingDef {
        percent: PercentEffects {
            resource_loss: pct(2.25, 50.0, true),
            honor_loss: pct(2.0, 50.0, true),
            ..NO_PERCENT
        },
        ..standard(BuildingId::Castles, "Castles")
    },
    BuildingDef {
        percent: PercentEffects {
            military_losses: pct(3.0, 75.0, true),
            plague_cure: pct(3.0, 75.0, true),
            birth_rate: pct(2.0, 50.0, true),
            ..NO_PERCENT
        },
        ..standard(BuildingId::Hospitals, "Hospitals")
    },
    BuildingDef {
        flat: FlatEffects {
            wizards: flat(0.02, false),
            ..NO_FLAT
        },
        ..standard(BuildingId::Guilds, "Guilds")
    },
    BuildingDef {
        flat: FlatEffects {
            runes: flat(12.0, true),
            ..NO_FLAT
        },
        ..standard(BuildingId::Towers, "Towers")
    },
    BuildingDef {
        percent: PercentEffects {
            thief_losses: pct(3.6, 90.0, true),
            tpa_bonus: pct(3.0, 75.0, true),
            ..NO_PERCENT
        },
        ..standard(BuildingId::ThievesDens, "Thieves' Dens")
    },
    BuildingDef {
        percent: PercentEffects {
            catch_thieves: pct(2.0, 50.0, true),
            thief_damage_reduction: pct(2.5, 62.5, true),
            ..NO_PERCENT
        },
        ..standard(BuildingId::WatchTowers, "Watch Towers")
    },
    BuildingDef {
        percent: PercentEffects {
            scientist_spawn: pct(1.5, 37.5, false),
            book_gen: pct(1.0, 25.0, false),
            ..NO_PERCENT
        },
        ..standard(BuildingId::Universities, "Universities")
    },
    BuildingDef {
        percent: PercentEffects {
            science_eff: pct(1.0, 25.0, false),
            ..NO_PERCENT
        },
        ..standard(BuildingId::Libraries, "Libraries")
    },
    BuildingDef {
        capacity: BuildingCapacity {
            horses: 80.0,
            ..NO_CAPACITY
        },
        flat: FlatEffects {
            horses: flat(2.0, true),
            ..NO_FLAT
        },
        ..standard(BuildingId::Stables, "Stables")
    },
    BuildingDef {
        capacity: BuildingCapacity {
            prisoners: 30.0,
            ..NO_CAPACITY
        },
        ..standard(BuildingId::Dungeons, "Dungeons")
    },
];

/// Acres per building type. Serializes as a sparse `{ "FARMS": 1000 }` map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<BuildingId, u32>", into = "BTreeMap<BuildingId, u32>")]
pub struct Buildings([u32; BuildingId::COUNT]);

impl Buildings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: BuildingId) -> u32 {
        self.0[id.index()]
    }

    pub fn set(&mut self, id: BuildingId, acres: u32) {
        self.0[id.index()] = acres;
    }

    /// Builder-style setter for tests and templates.
    pub fn with(mut self, id: BuildingId, acres: u32) -> Self {
        self.set(id, acres);
        self
    }

    /// Sum of all building counts. Widened so any mix of counts fits.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&n| n as u64).sum()
    }

    /// Total jobs offered, per the rule table (Homes offer none).
    pub fn total_jobs(&self) -> u64 {
        self.iter().map(|(id, n)| n as u64 * id.def().jobs).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BuildingId, u32)> + '_ {
        BuildingId::ALL.iter().map(move |&id| (id, self.get(id)))
    }
}

impl From<BTreeMap<BuildingId, u32>> for Buildings {
    fn from(map: BTreeMap<BuildingId, u32>) -> Self {
        let mut out = Self::default();
        for (id, acres) in map {
            out.set(id, acres);
        }
        out
    }
}

impl From<Buildings> for BTreeMap<BuildingId, u32> {
    fn from(buildings: Buildings) -> Self {
        buildings.iter().filter(|&(_, n)| n > 0).collect()
    }
}

impl FromIterator<(BuildingId, u32)> for Buildings {
    fn from_iter<I: IntoIterator<Item = (BuildingId, u32)>>(iter: I) -> Self {
        let mut out = Self::default();
        for (id, acres) in iter {
            out.set(id, acres);
        }
        out
    }
}
