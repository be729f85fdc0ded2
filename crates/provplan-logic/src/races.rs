//! Race definitions — unit stats, percent modifiers and building restrictions.
//!
//! Modifiers are fractions: `income: 0.30` means +30% income. A modifier a
//! race does not have is zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::buildings::BuildingId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Race {
    Avian = 0,
    DarkElf = 1,
    Dwarf = 2,
    Elf = 3,
    Faery = 4,
    Halfling = 5,
    Human = 6,
    Orc = 7,
    Undead = 8,
    Gnome = 9,
}

impl Race {
    pub const ALL: [Race; 10] = [
        Self::Avian,
        Self::DarkElf,
        Self::Dwarf,
        Self::Elf,
        Self::Faery,
        Self::Halfling,
        Self::Human,
        Self::Orc,
        Self::Undead,
        Self::Gnome,
    ];

    pub fn def(self) -> &'static RaceDef {
        &RACE_DEFS[self as usize]
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.def().display)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitStats {
    pub off: f64,
    pub def: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EliteStats {
    pub off: f64,
    pub def: f64,
    pub cost: f64,
    pub networth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceUnits {
    pub soldier: UnitStats,
    pub off_spec: UnitStats,
    pub def_spec: UnitStats,
    pub elite: EliteStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RaceMods {
    pub income: f64,
    pub be: f64,
    pub pop: f64,
    pub birth_rate: f64,
    /// +0.5 = +50%; -1 = no food needed.
    pub food_consumption: f64,
    pub wpa: f64,
    pub tpa: f64,
    pub rune_production: f64,
    pub rune_cost: f64,
    pub attack_time: f64,
    pub military_casualties: f64,
    pub draft_cost: f64,
    pub training_cost: f64,
    pub training_time: f64,
    pub book_production: f64,
    pub thievery_effectiveness: f64,
    pub horse_offense_bonus: f64,
    pub merc_cost: f64,
    pub explore_cost: f64,
    pub build_cost: f64,
    pub gains: f64,
    pub gains_war: f64,
    pub ome: f64,
    pub wages: f64,
    pub thief_cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RaceRestrictions {
    pub no_barracks: bool,
    pub no_stables: bool,
    pub no_war_horses: bool,
    pub no_training_grounds: bool,
    pub no_dungeons: bool,
    pub only_thievery_intel: bool,
}

impl RaceRestrictions {
    /// Whether this race may construct `id`.
    pub fn allows(&self, id: BuildingId) -> bool {
        match id {
            BuildingId::Barracks => !self.no_barracks,
            BuildingId::Stables => !self.no_stables,
            BuildingId::TrainingGrounds => !self.no_training_grounds,
            BuildingId::Dungeons => !self.no_dungeons,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceDef {
    pub id: Race,
    pub display: &'static str,
    pub mods: RaceMods,
    pub restrictions: RaceRestrictions,
    pub spellbook: &'static [&'static str],
    pub unique_ability: &'static str,
    pub units: RaceUnits,
}

const NO_MODS: RaceMods = RaceMods {
    income: 0.0,
    be: 0.0,
    pop: 0.0,
    birth_rate: 0.0,
    food_consumption: 0.0,
    wpa: 0.0,
    tpa: 0.0,
    rune_production: 0.0,
    rune_cost: 0.0,
    attack_time: 0.0,
    military_casualties: 0.0,
    draft_cost: 0.0,
    training_cost: 0.0,
    training_time: 0.0,
    book_production: 0.0,
    thievery_effectiveness: 0.0,
    horse_offense_bonus: 0.0,
    merc_cost: 0.0,
    explore_cost: 0.0,
    build_cost: 0.0,
    gains: 0.0,
    gains_war: 0.0,
    ome: 0.0,
    wages: 0.0,
    thief_cost: 0.0,
};

const UNRESTRICTED: RaceRestrictions = RaceRestrictions {
    no_barracks: false,
    no_stables: false,
    no_war_horses: false,
    no_training_grounds: false,
    no_dungeons: false,
    only_thievery_intel: false,
};

const fn units(
    soldier: (f64, f64),
    off_spec: f64,
    def_spec: f64,
    elite: (f64, f64, f64, f64),
) -> RaceUnits {
    RaceUnits {
        soldier: UnitStats {
            off: soldier.0,
            def: soldier.1,
        },
        off_spec: UnitStats {
            off: off_spec,
            def: 0.0,
        },
        def_spec: UnitStats {
            off: 0.0,
            def: def_spec,
        },
        elite: EliteStats {
            off: elite.0,
            def: elite.1,
            cost: elite.2,
            networth: elite.3,
        },
    }
}

// Indexed by `Race as usize`.
static RACE_DEFS: [RaceDef; 10] = [
    RaceDef {
        id: Race::Avian,
        display: "Avian",
        mods: RaceMods {
            attack_time: -0.25,
            birth_rate: 0.20,
            military_casualties: 0.15,
            ..NO_MODS
        },
        restrictions: RaceRestrictions {
            no_barracks: true,
            no_stables: true,
            no_war_horses: true,
            ..UNRESTRICTED
        },
        spellbook: &["Town Watch", "Reflect Magic"],
        unique_ability: "Skybound Strike: next attack auto-succeeds with -50% losses.",
        units: units((3.0, 0.0), 12.0, 10.0, (15.0, 3.0, 900.0, 6.75)),
    },
    RaceDef {
        id: Race::DarkElf,
        display: "Dark Elf",
        mods: RaceMods {
            wpa: 0.20,
            ome: 0.10,
            wages: 0.20,
            thief_cost: 0.20,
            horse_offense_bonus: 1.0,
            ..NO_MODS
        },
        restrictions: UNRESTRICTED,
        spellbook: &["Blizzard", "Guile", "Mage's Fury", "Invisibility"],
        unique_ability: "Shadow Surge: offensive spells cost -60% runes for 2 ticks.",
        units: units((3.0, 0.0), 10.0, 11.0, (13.0, 6.0, 900.0, 7.5)),
    },
    RaceDef {
        id: Race::Dwarf,
        display: "Dwarf",
        mods: RaceMods {
            be: 0.25,
            food_consumption: 0.50,
            wpa: -0.10,
            explore_cost: 0.20,
            ..NO_MODS
        },
        restrictions: UNRESTRICTED,
        spellbook: &["Miner's Mystique"],
        unique_ability: "Molten Anvil: for 6 ticks, +15% BE, +15% income, +25% draft speed.",
        units: units((3.0, 0.0), 10.0, 10.0, (13.0, 6.0, 1000.0, 7.5)),
    },
    RaceDef {
        id: Race::Elf,
        display: "Elf",
        mods: RaceMods {
            wpa: 0.25,
            rune_production: 0.20,
            ..NO_MODS
        },
        restrictions: RaceRestrictions {
            no_training_grounds: true,
            no_dungeons: true,
            ..UNRESTRICTED
        },
        spellbook: &["Pitfalls", "Wrath", "Mist"],
        unique_ability: "Arcane Surge: while mana < 30%, spells deal +25% damage.",
        units: units((3.0, 0.0), 10.0, 12.0, (12.0, 7.0, 1000.0, 7.5)),
    },
    RaceDef {
        id: Race::Faery,
        display: "Faery",
        mods: RaceMods {
            wpa: 0.25,
            be: -0.05,
            rune_cost: 0.30,
            ..NO_MODS
        },
        restrictions: UNRESTRICTED,
        spellbook: &[
            "Tree of Gold",
            "Quick Feet",
            "Town Watch",
            "Vermin",
            "Mist",
            "Wrath",
            "Blizzard",
            "Guile",
            "Mage's Fury",
            "Greater Protection",
            "Fountain of Knowledge",
            "Miner's Mystique",
            "Pitfalls",
            "Revelation",
            "Animate Dead",
            "Invisibility",
            "Fools Gold",
        ],
        unique_ability: "Ethereal Mirage: for 2 ticks, Mystic Vortex removes all active spells.",
        units: units((3.0, 0.0), 10.0, 10.0, (4.0, 13.0, 1200.0, 7.25)),
    },
    RaceDef {
        id: Race::Halfling,
        display: "Halfling",
        mods: RaceMods {
            pop: 0.15,
            tpa: 0.30,
            birth_rate: -0.25,
            build_cost: 0.25,
            ..NO_MODS
        },
        restrictions: UNRESTRICTED,
        spellbook: &["Quick Feet", "Town Watch", "Vermin", "Invisibility"],
        unique_ability: "Sneak Attack: for 2 ticks, thievery ops incur -50% losses.",
        units: units((3.0, 0.0), 10.0, 10.0, (12.0, 7.0, 950.0, 7.5)),
    },
    RaceDef {
        id: Race::Human,
        display: "Human",
        mods: RaceMods {
            income: 0.30,
            merc_cost: -0.50,
            training_cost: -0.25,
            training_time: 0.25,
            horse_offense_bonus: 1.0,
            ..NO_MODS
        },
        restrictions: UNRESTRICTED,
        spellbook: &["Fountain of Knowledge", "Revelation"],
        unique_ability: "First Aid: removes all negative statuses.",
        units: units((3.0, 0.0), 13.0, 10.0, (7.0, 12.0, 1050.0, 8.0)),
    },
    RaceDef {
        id: Race::Orc,
        display: "Orc",
        mods: RaceMods {
            gains: 0.05,
            gains_war: 0.10,
            draft_cost: -0.50,
            book_production: -0.20,
            thievery_effectiveness: -0.20,
            ..NO_MODS
        },
        restrictions: UNRESTRICTED,
        spellbook: &["Aggression", "Bloodlust"],
        unique_ability: "Carnage: each successful attack gets a random bonus.",
        units: units((3.0, 0.0), 10.0, 10.0, (15.0, 2.0, 1000.0, 6.25)),
    },
    RaceDef {
        id: Race::Undead,
        display: "Undead",
        mods: RaceMods {
            military_casualties: -0.40,
            food_consumption: -1.0,
            ..NO_MODS
        },
        restrictions: RaceRestrictions {
            only_thievery_intel: true,
            ..UNRESTRICTED
        },
        spellbook: &["Animate Dead", "Aggression", "Hero's Inspiration"],
        unique_ability: "No food, immune to plague, converts specs to elites on TM.",
        units: units((3.0, 3.0), 10.0, 10.0, (15.0, 4.0, 900.0, 7.25)),
    },
    RaceDef {
        id: Race::Gnome,
        display: "Gnome",
        mods: RaceMods {
            attack_time: -0.10,
            tpa: 0.15,
            rune_cost: 0.25,
            wpa: -0.15,
            ..NO_MODS
        },
        restrictions: UNRESTRICTED,
        spellbook: &["Quick Feet", "Aggression"],
        unique_ability: "Cunning Assault: successful attacks can grant stacked thievery boosts.",
        units: units((3.0, 0.0), 11.0, 10.0, (14.0, 4.0, 900.0, 6.5)),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for race in Race::ALL {
            assert_eq!(race.def().id, race);
        }
    }

    #[test]
    fn test_restrictions() {
        let elf = Race::Elf.def().restrictions;
        assert!(!elf.allows(BuildingId::TrainingGrounds));
        assert!(!elf.allows(BuildingId::Dungeons));
        assert!(elf.allows(BuildingId::Barracks));

        let avian = Race::Avian.def().restrictions;
        assert!(!avian.allows(BuildingId::Barracks));
        assert!(!avian.allows(BuildingId::Stables));
        assert!(avian.allows(BuildingId::TrainingGrounds));

        for id in BuildingId::ALL {
            assert!(Race::Human.def().restrictions.allows(id));
        }
    }

    #[test]
    fn test_known_modifiers() {
        assert_eq!(Race::Human.def().mods.income, 0.30);
        assert_eq!(Race::Dwarf.def().mods.be, 0.25);
        assert_eq!(Race::Faery.def().mods.be, -0.05);
        assert_eq!(Race::Halfling.def().mods.pop, 0.15);
        assert_eq!(Race::DarkElf.def().mods.wages, 0.20);
        assert_eq!(Race::Orc.def().mods.income, 0.0);
    }

    #[test]
    fn test_serde_ids() {
        let race: Race = serde_json::from_str("\"DARK_ELF\"").unwrap();
        assert_eq!(race, Race::DarkElf);
        assert!(serde_json::from_str::<Race>("\"TROLL\"").is_err());
    }
}
