//! Personality definitions — ruler personality modifiers and starting bonuses.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Personality {
    Artisan = 0,
    Cleric = 1,
    Heretic = 2,
    Mystic = 3,
    Rogue = 4,
    Tactician = 5,
    Warrior = 6,
    Paladin = 7,
    Necromancer = 8,
    General = 9,
}

impl Personality {
    pub const ALL: [Personality; 10] = [
        Self::Artisan,
        Self::Cleric,
        Self::Heretic,
        Self::Mystic,
        Self::Rogue,
        Self::Tactician,
        Self::Warrior,
        Self::Paladin,
        Self::Necromancer,
        Self::General,
    ];

    pub fn def(self) -> &'static PersonalityDef {
        &PERSONALITY_DEFS[self as usize]
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.def().display)
    }
}

/// Fractional modifiers; absent ones are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PersonalityMods {
    pub building_capacity: f64,
    pub building_production: f64,
    pub building_credits_gain: f64,
    pub espionage_success: f64,
    pub elite_def_bonus: f64,
    pub def_spec_def_bonus: f64,
    pub hospital_eff: f64,
    pub wizard_production: f64,
    pub thief_losses: f64,
    pub spell_damage: f64,
    pub sabotage_damage: f64,
    pub guild_eff: f64,
    pub td_eff: f64,
    pub attack_time: f64,
    pub ome: f64,
    pub merc_cost: f64,
    pub wpa: f64,
    pub training_time: f64,
    pub spec_credits_gain: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartingBonus {
    pub soldiers: u32,
    pub spec_credits: u32,
    pub building_credits: u32,
    pub wizards: u32,
    pub thieves: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonalityDef {
    pub id: Personality,
    pub display: &'static str,
    pub mods: PersonalityMods,
    pub starting: StartingBonus,
    pub unique_ability: &'static str,
}

const NO_MODS: PersonalityMods = PersonalityMods {
    building_capacity: 0.0,
    building_production: 0.0,
    building_credits_gain: 0.0,
    espionage_success: 0.0,
    elite_def_bonus: 0.0,
    def_spec_def_bonus: 0.0,
    hospital_eff: 0.0,
    wizard_production: 0.0,
    thief_losses: 0.0,
    spell_damage: 0.0,
    sabotage_damage: 0.0,
    guild_eff: 0.0,
    td_eff: 0.0,
    attack_time: 0.0,
    ome: 0.0,
    merc_cost: 0.0,
    wpa: 0.0,
    training_time: 0.0,
    spec_credits_gain: 0.0,
};

const NO_START: StartingBonus = StartingBonus {
    soldiers: 0,
    spec_credits: 0,
    building_credits: 0,
    wizards: 0,
    thieves: 0,
};

const MILITARY_START: StartingBonus = StartingBonus {
    soldiers: 800,
    spec_credits: 800,
    ..NO_START
};

static PERSONALITY_DEFS: [PersonalityDef; 10] = [
    PersonalityDef {
        id: Personality::Artisan,
        display: "Artisan",
        mods: PersonalityMods {
            building_capacity: 0.40,
            building_production: 0.40,
            building_credits_gain: 0.40,
            espionage_success: 1.0,
            ..NO_MODS
        },
        starting: StartingBonus {
            soldiers: 600,
            spec_credits: 600,
            building_credits: 200,
            ..NO_START
        },
        unique_ability: "Demolition Mastery: in War, Raze destroys 40% of target buildings.",
    },
    PersonalityDef {
        id: Personality::Cleric,
        display: "Cleric",
        mods: PersonalityMods {
            elite_def_bonus: 1.0,
            def_spec_def_bonus: 1.0,
            hospital_eff: 0.35,
            ..NO_MODS
        },
        starting: MILITARY_START,
        unique_ability: "Divine Favour: 50% chance to double duration on self-spells.",
    },
    PersonalityDef {
        id: Personality::Heretic,
        display: "Heretic",
        mods: PersonalityMods {
            wizard_production: 0.50,
            thief_losses: -0.50,
            spell_damage: 0.20,
            sabotage_damage: 0.20,
            ..NO_MODS
        },
        starting: StartingBonus {
            wizards: 400,
            thieves: 400,
            ..NO_START
        },
        unique_ability: "Chaotic Affliction: for 2 ticks, +10-30% spell and sabotage damage.",
    },
    PersonalityDef {
        id: Personality::Mystic,
        display: "Mystic",
        mods: PersonalityMods {
            guild_eff: 0.85,
            ..NO_MODS
        },
        starting: StartingBonus {
            wizards: 800,
            ..NO_START
        },
        unique_ability: "Mana Well: instantly regain ~15% mana.",
    },
    PersonalityDef {
        id: Personality::Rogue,
        display: "Rogue",
        mods: PersonalityMods {
            td_eff: 0.70,
            sabotage_damage: 0.25,
            ..NO_MODS
        },
        starting: StartingBonus {
            thieves: 800,
            ..NO_START
        },
        unique_ability: "Shadows in the Night: +25% sabotage damage at >=50% stealth.",
    },
    PersonalityDef {
        id: Personality::Tactician,
        display: "Tactician",
        mods: PersonalityMods {
            attack_time: -0.15,
            ..NO_MODS
        },
        starting: MILITARY_START,
        unique_ability: "Dragons Wrath: 3% of raw offense also damages dragons.",
    },
    PersonalityDef {
        id: Personality::Warrior,
        display: "Warrior",
        mods: PersonalityMods {
            ome: 0.15,
            merc_cost: -0.40,
            ..NO_MODS
        },
        starting: MILITARY_START,
        unique_ability: "Battle Cry: successful attacks kill 0.5% of target population.",
    },
    PersonalityDef {
        id: Personality::Paladin,
        display: "Paladin",
        mods: NO_MODS,
        starting: MILITARY_START,
        unique_ability: "Smite: next TM destroys 25% guilds/towers/TDs.",
    },
    PersonalityDef {
        id: Personality::Necromancer,
        display: "Necromancer",
        mods: PersonalityMods {
            wpa: 0.25,
            ..NO_MODS
        },
        starting: MILITARY_START,
        unique_ability: "Grave Harvest: successful attack grants +20% spell damage for 2 ticks.",
    },
    PersonalityDef {
        id: Personality::General,
        display: "General",
        mods: PersonalityMods {
            training_time: -0.20,
            spec_credits_gain: 0.20,
            ..NO_MODS
        },
        starting: MILITARY_START,
        unique_ability: "General's Command: for 2 ticks, +60% honour gains in War.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for p in Personality::ALL {
            assert_eq!(p.def().id, p);
        }
    }

    #[test]
    fn test_warrior_ome() {
        assert_eq!(Personality::Warrior.def().mods.ome, 0.15);
        assert_eq!(Personality::Paladin.def().mods.ome, 0.0);
    }
}
