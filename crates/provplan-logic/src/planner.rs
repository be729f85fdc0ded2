//! Build planner — proposes a revised building layout that meets player goals.
//!
//! The planner never builds on barren land and never recruits units. It only
//! moves already-built acres from a fixed list of "soft" donor buildings into
//! the buildings a goal needs, within a rebuild budget expressed as a percent
//! of built land.
//!
//! # Goal passes (in order)
//!
//! 1. Density floors: Guilds and Thieves' Dens up to a percent of built land
//!    (10% implied when a WPA/TPA goal is set without an explicit percent).
//! 2. Starvation guard: enough Farms to bring net food back to zero.
//! 3. Income floor: one Bank at a time until net income meets the target,
//!    the budget runs out, an acre stops paying (< 0.1 gold), or 200 tries.
//! 4. Focus: Training Grounds to 18% for `Offense`, Guilds to 16% for `Tm`.
//!
//! Later passes may draw on acres an earlier pass placed (Banks and Training
//! Grounds are donors too), so the order is part of the contract.
//!
//! ```
//! use provplan_logic::buildings::{BuildingId, Buildings};
//! use provplan_logic::planner::{generate_suggested_build, BuildFocus, BuildGoals};
//! use provplan_logic::province::Province;
//!
//! let mut prov = Province {
//!     acres: 100,
//!     buildings: Buildings::new().with(BuildingId::Homes, 100),
//!     ..Default::default()
//! };
//! prov.sync_land();
//!
//! let goals = BuildGoals { focus: BuildFocus::Offense, ..Default::default() };
//! let plan = generate_suggested_build(&prov, &goals);
//! assert_eq!(plan.buildings.get(BuildingId::TrainingGrounds), 18);
//! assert_eq!(plan.buildings.get(BuildingId::Homes), 82);
//! ```

use serde::{Deserialize, Serialize};

use crate::buildings::{BuildingId, Buildings};
use crate::efficiency::calculate_be;
use crate::evaluation::{evaluate_province_build, BuildEvaluation};
use crate::food::farm_yield;
use crate::province::{clone_province_with_buildings, Province};
use crate::races::RaceRestrictions;

/// Buildings the planner may tear down, most expendable first.
pub const DONOR_PRIORITY: [BuildingId; 12] = [
    BuildingId::Dungeons,
    BuildingId::Stables,
    BuildingId::Castles,
    BuildingId::Libraries,
    BuildingId::Universities,
    BuildingId::Mills,
    BuildingId::Barracks,
    BuildingId::Armouries,
    BuildingId::Forts,
    BuildingId::TrainingGrounds,
    BuildingId::Banks,
    BuildingId::Homes,
];

/// Guild/Den floor implied by a WPA/TPA goal without an explicit percent.
const IMPLIED_DENSITY_PERCENT: f64 = 10.0;
const OFFENSE_TG_PERCENT: f64 = 18.0;
const TM_GUILDS_PERCENT: f64 = 16.0;
const MAX_INCOME_ATTEMPTS: u32 = 200;
/// An extra Bank must raise net income by more than this to keep going.
const MIN_INCOME_GAIN: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildFocus {
    Income,
    Offense,
    #[serde(rename = "TM")]
    Tm,
    #[default]
    Hybrid,
}

/// Player goals. Every field but `focus` is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildGoals {
    /// Gold per tick after wages.
    pub min_net_income: Option<f64>,
    /// Require net food per tick >= 0.
    pub no_starvation: bool,
    pub min_tpa: Option<f64>,
    pub min_wpa: Option<f64>,
    pub min_guilds_percent: Option<f64>,
    pub min_tds_percent: Option<f64>,
    /// Maximum percent of built land the planner may rebuild.
    pub max_rebuild_percent: Option<f64>,
    pub focus: BuildFocus,
}

impl BuildGoals {
    /// Guilds floor in percent of built land, explicit or implied by WPA.
    pub fn effective_min_guilds_percent(&self) -> f64 {
        implied_floor(self.min_guilds_percent, self.min_wpa)
    }

    /// Thieves' Dens floor in percent of built land, explicit or implied by TPA.
    pub fn effective_min_tds_percent(&self) -> f64 {
        implied_floor(self.min_tds_percent, self.min_tpa)
    }
}

fn implied_floor(explicit: Option<f64>, density: Option<f64>) -> f64 {
    explicit.unwrap_or(match density {
        Some(d) if d > 0.0 => IMPLIED_DENSITY_PERCENT,
        _ => 0.0,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingChange {
    pub building: BuildingId,
    pub before: u32,
    pub after: u32,
}

impl BuildingChange {
    pub fn delta(&self) -> i64 {
        self.after as i64 - self.before as i64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPlan {
    pub buildings: Buildings,
    pub evaluation: BuildEvaluation,
    /// Thieves still needed to reach the TPA goal; the planner never recruits.
    pub required_extra_thieves: u64,
    /// Wizards still needed to reach the WPA goal.
    pub required_extra_wizards: u64,
    /// Acres moved between building types.
    pub rebuilt_acres: u32,
    pub max_rebuild_acres: u32,
}

impl BuildPlan {
    /// Per-building differences from `original`, in building order.
    pub fn changes(&self, original: &Buildings) -> Vec<BuildingChange> {
        original
            .iter()
            .zip(self.buildings.iter())
            .filter(|((_, before), (_, after))| before != after)
            .map(|((building, before), (_, after))| BuildingChange {
                building,
                before,
                after,
            })
            .collect()
    }
}

/// Working copy of the layout threaded through every goal pass.
struct LayoutBuilder<'a> {
    prov: &'a Province,
    buildings: Buildings,
    built_acres: u32,
    max_rebuild_acres: u32,
    rebuilt_acres: u32,
    restrictions: RaceRestrictions,
}

impl<'a> LayoutBuilder<'a> {
    fn new(prov: &'a Province, built_acres: u32, max_rebuild_percent: Option<f64>) -> Self {
        let max_rebuild_acres = match max_rebuild_percent {
            Some(pct) => (pct / 100.0 * built_acres as f64).floor() as u32,
            None => built_acres,
        };
        Self {
            prov,
            buildings: prov.buildings,
            built_acres,
            max_rebuild_acres,
            rebuilt_acres: 0,
            restrictions: prov.race.def().restrictions,
        }
    }

    fn remaining_budget(&self) -> u32 {
        self.max_rebuild_acres.saturating_sub(self.rebuilt_acres)
    }

    fn has_budget(&self) -> bool {
        self.rebuilt_acres < self.max_rebuild_acres
    }

    /// Acres of built land covered by `percent`, rounded up.
    fn acres_for_percent(&self, percent: f64) -> u32 {
        (percent / 100.0 * self.built_acres as f64).ceil() as u32
    }

    fn move_acres(&mut self, from: BuildingId, to: BuildingId, acres: u32) -> u32 {
        if acres == 0 || !self.restrictions.allows(to) {
            return 0;
        }
        let have = self.buildings.get(from);
        let room = u32::MAX - self.buildings.get(to);
        let moved = have.min(acres).min(self.remaining_budget()).min(room);
        if moved == 0 {
            return 0;
        }
        self.buildings.set(from, have - moved);
        self.buildings.set(to, self.buildings.get(to) + moved);
        self.rebuilt_acres += moved;
        log::trace!("moved {} acres {:?} -> {:?}", moved, from, to);
        moved
    }

    /// Drain donors in priority order into `to`. Returns acres moved.
    fn take_from_donors(&mut self, amount: u32, to: BuildingId) -> u32 {
        let mut remaining = amount;
        for donor in DONOR_PRIORITY {
            if remaining == 0 {
                break;
            }
            if donor == to || !self.restrictions.allows(donor) {
                continue;
            }
            remaining -= self.move_acres(donor, to, remaining);
        }
        amount - remaining
    }

    /// Raise `id` to at least `percent` of built land. Returns acres moved.
    fn raise_to_percent(&mut self, id: BuildingId, percent: f64) -> u32 {
        let desired = self.acres_for_percent(percent);
        let have = self.buildings.get(id);
        if have >= desired {
            return 0;
        }
        let moved = self.take_from_donors(desired - have, id);
        log::debug!(
            "{:?} floor {:.1}%: wanted {} more, moved {} (budget {}/{})",
            id,
            percent,
            desired - have,
            moved,
            self.rebuilt_acres,
            self.max_rebuild_acres
        );
        moved
    }

    fn candidate(&self) -> Province {
        clone_province_with_buildings(self.prov, &self.buildings)
    }

    fn evaluate(&self) -> BuildEvaluation {
        evaluate_province_build(&self.candidate())
    }
}

/// Thieves or wizards missing to reach `per_acre` units per acre.
fn density_shortfall(per_acre: Option<f64>, acres: u32, have: u64) -> u64 {
    let required = per_acre.unwrap_or(0.0) * acres as f64;
    (required - have as f64).ceil().max(0.0) as u64
}

/// Suggest a layout for `prov` that satisfies `goals` as far as the rebuild
/// budget allows. Never modifies `prov`.
pub fn generate_suggested_build(prov: &Province, goals: &BuildGoals) -> BuildPlan {
    let required_extra_thieves = density_shortfall(goals.min_tpa, prov.acres, prov.thieves);
    let required_extra_wizards = density_shortfall(goals.min_wpa, prov.acres, prov.wizards);

    let built_acres = if prov.built_acres > 0 {
        prov.built_acres
    } else {
        u32::try_from(prov.buildings.total()).unwrap_or(u32::MAX)
    };

    if built_acres == 0 {
        log::debug!("nothing built, returning layout unchanged");
        return BuildPlan {
            buildings: prov.buildings,
            evaluation: evaluate_province_build(prov),
            required_extra_thieves,
            required_extra_wizards,
            rebuilt_acres: 0,
            max_rebuild_acres: 0,
        };
    }

    let mut layout = LayoutBuilder::new(prov, built_acres, goals.max_rebuild_percent);
    log::debug!(
        "planning {:?} focus on {} built acres, budget {}",
        goals.focus,
        built_acres,
        layout.max_rebuild_acres
    );

    // 1. Density floors
    let min_guilds_percent = goals.effective_min_guilds_percent();
    if min_guilds_percent > 0.0 {
        layout.raise_to_percent(BuildingId::Guilds, min_guilds_percent);
    }
    let min_tds_percent = goals.effective_min_tds_percent();
    if min_tds_percent > 0.0 {
        layout.raise_to_percent(BuildingId::ThievesDens, min_tds_percent);
    }

    let mut evaluation = layout.evaluate();

    // 2. Starvation guard
    if goals.no_starvation && evaluation.net_food_per_tick < 0.0 && layout.has_budget() {
        let per_farm = farm_yield(calculate_be(&layout.candidate()).be);
        if per_farm > 0.0 {
            let wanted = (-evaluation.net_food_per_tick / per_farm).ceil() as u32;
            let needed = layout.remaining_budget().min(wanted);
            if needed > 0 {
                let moved = layout.take_from_donors(needed, BuildingId::Farms);
                evaluation = layout.evaluate();
                log::debug!(
                    "starvation guard: {} farms wanted, {} moved, net food now {:.1}",
                    wanted,
                    moved,
                    evaluation.net_food_per_tick
                );
            }
        }
    }

    // 3. Income floor
    if let Some(target) = goals.min_net_income {
        let mut attempts = 0;
        while evaluation.net_income < target
            && layout.has_budget()
            && attempts < MAX_INCOME_ATTEMPTS
        {
            let before = evaluation.net_income;
            layout.take_from_donors(1, BuildingId::Banks);
            evaluation = layout.evaluate();
            attempts += 1;
            if evaluation.net_income <= before + MIN_INCOME_GAIN {
                log::debug!("income pass stalled at {:.1} after {} attempts", before, attempts);
                break;
            }
        }
        log::debug!(
            "income pass: net {:.1} (target {:.1}) after {} attempts",
            evaluation.net_income,
            target,
            attempts
        );
    }

    // 4. Focus tweak
    if layout.has_budget() {
        let focus_move = match goals.focus {
            BuildFocus::Offense if layout.restrictions.allows(BuildingId::TrainingGrounds) => {
                layout.raise_to_percent(BuildingId::TrainingGrounds, OFFENSE_TG_PERCENT)
            }
            BuildFocus::Tm => layout.raise_to_percent(
                BuildingId::Guilds,
                min_guilds_percent.max(TM_GUILDS_PERCENT),
            ),
            _ => 0,
        };
        if focus_move > 0 {
            evaluation = layout.evaluate();
        }
    }

    BuildPlan {
        buildings: layout.buildings,
        evaluation,
        required_extra_thieves,
        required_extra_wizards,
        rebuilt_acres: layout.rebuilt_acres,
        max_rebuild_acres: layout.max_rebuild_acres,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::races::Race;

    fn province(race: Race, buildings: Buildings) -> Province {
        let mut prov = Province {
            race,
            acres: buildings.total() as u32,
            buildings,
            peasants: 20_000,
            ..Default::default()
        };
        prov.sync_land();
        prov
    }

    fn positive_moves(before: &Buildings, after: &Buildings) -> u32 {
        before
            .iter()
            .zip(after.iter())
            .map(|((_, b), (_, a))| a.saturating_sub(b))
            .sum()
    }

    #[test]
    fn test_nothing_built_is_noop() {
        let prov = Province {
            acres: 500,
            barren_acres: 500,
            thieves: 100,
            ..Default::default()
        };
        let goals = BuildGoals {
            min_tpa: Some(1.0),
            focus: BuildFocus::Offense,
            ..Default::default()
        };
        let plan = generate_suggested_build(&prov, &goals);
        assert_eq!(plan.buildings, prov.buildings);
        assert_eq!(plan.rebuilt_acres, 0);
        assert_eq!(plan.required_extra_thieves, 400);
    }

    #[test]
    fn test_no_goals_changes_nothing() {
        let prov = province(
            Race::Human,
            Buildings::new()
                .with(BuildingId::Homes, 50)
                .with(BuildingId::Farms, 50),
        );
        let plan = generate_suggested_build(&prov, &BuildGoals::default());
        assert_eq!(plan.buildings, prov.buildings);
        assert_eq!(plan.rebuilt_acres, 0);
        assert!(plan.changes(&prov.buildings).is_empty());
    }

    #[test]
    fn test_wpa_goal_implies_guild_floor() {
        let prov = province(Race::Human, Buildings::new().with(BuildingId::Homes, 200));
        let goals = BuildGoals {
            min_wpa: Some(0.5),
            ..Default::default()
        };
        let plan = generate_suggested_build(&prov, &goals);
        assert_eq!(plan.buildings.get(BuildingId::Guilds), 20);
        assert_eq!(plan.buildings.get(BuildingId::Homes), 180);
        assert_eq!(plan.required_extra_wizards, 100);
    }

    #[test]
    fn test_explicit_percent_overrides_implied() {
        let prov = province(Race::Human, Buildings::new().with(BuildingId::Homes, 200));
        let goals = BuildGoals {
            min_tpa: Some(1.0),
            min_tds_percent: Some(5.0),
            ..Default::default()
        };
        let plan = generate_suggested_build(&prov, &goals);
        assert_eq!(plan.buildings.get(BuildingId::ThievesDens), 10);
    }

    #[test]
    fn test_donor_order() {
        let prov = province(
            Race::Human,
            Buildings::new()
                .with(BuildingId::Homes, 50)
                .with(BuildingId::Banks, 20)
                .with(BuildingId::Stables, 5)
                .with(BuildingId::Dungeons, 3)
                .with(BuildingId::Farms, 22),
        );
        let goals = BuildGoals {
            min_guilds_percent: Some(10.0),
            ..Default::default()
        };
        let plan = generate_suggested_build(&prov, &goals);
        // 10 acres: 3 Dungeons, 5 Stables, then 2 Banks; Homes untouched
        assert_eq!(plan.buildings.get(BuildingId::Dungeons), 0);
        assert_eq!(plan.buildings.get(BuildingId::Stables), 0);
        assert_eq!(plan.buildings.get(BuildingId::Banks), 18);
        assert_eq!(plan.buildings.get(BuildingId::Homes), 50);
        assert_eq!(plan.buildings.get(BuildingId::Farms), 22);
        assert_eq!(plan.buildings.get(BuildingId::Guilds), 10);
    }

    #[test]
    fn test_restricted_donors_skipped() {
        let prov = province(
            Race::Avian,
            Buildings::new()
                .with(BuildingId::Barracks, 30)
                .with(BuildingId::Homes, 70),
        );
        let goals = BuildGoals {
            min_guilds_percent: Some(10.0),
            ..Default::default()
        };
        let plan = generate_suggested_build(&prov, &goals);
        assert_eq!(plan.buildings.get(BuildingId::Barracks), 30);
        assert_eq!(plan.buildings.get(BuildingId::Homes), 60);
    }

    #[test]
    fn test_budget_caps_moves() {
        let prov = province(Race::Human, Buildings::new().with(BuildingId::Homes, 100));
        let goals = BuildGoals {
            min_guilds_percent: Some(50.0),
            max_rebuild_percent: Some(10.0),
            ..Default::default()
        };
        let plan = generate_suggested_build(&prov, &goals);
        assert_eq!(plan.max_rebuild_acres, 10);
        assert_eq!(plan.rebuilt_acres, 10);
        assert_eq!(plan.buildings.get(BuildingId::Guilds), 10);
        assert!(positive_moves(&prov.buildings, &plan.buildings) <= 10);
    }

    #[test]
    fn test_starvation_guard_adds_farms() {
        let mut prov = province(Race::Human, Buildings::new().with(BuildingId::Homes, 100));
        prov.peasants = 2_000;
        let before = evaluate_province_build(&prov);
        assert!(before.net_food_per_tick < 0.0);

        let goals = BuildGoals {
            no_starvation: true,
            ..Default::default()
        };
        let plan = generate_suggested_build(&prov, &goals);
        // 500 bushels short; BE is 1.0 with no jobs -> ceil(500/60) = 9 farms
        assert_eq!(plan.buildings.get(BuildingId::Farms), 9);
        assert_eq!(plan.buildings.get(BuildingId::Homes), 91);
        assert!(plan.evaluation.net_food_per_tick >= 0.0);
    }

    #[test]
    fn test_income_floor_adds_banks() {
        let mut prov = province(
            Race::Orc,
            Buildings::new()
                .with(BuildingId::Mills, 40)
                .with(BuildingId::Farms, 60),
        );
        prov.peasants = 2_500;
        let start = evaluate_province_build(&prov).net_income;

        let goals = BuildGoals {
            min_net_income: Some(start + 100.0),
            ..Default::default()
        };
        let plan = generate_suggested_build(&prov, &goals);
        let banks = plan.buildings.get(BuildingId::Banks);
        // Each Bank pays 25 gold at full BE
        assert_eq!(banks, 4);
        assert_eq!(plan.buildings.get(BuildingId::Mills), 36);
        assert!(plan.evaluation.net_income >= start + 100.0);
    }

    #[test]
    fn test_income_floor_stalls_without_donors() {
        let prov = province(Race::Human, Buildings::new().with(BuildingId::Farms, 100));
        let goals = BuildGoals {
            min_net_income: Some(1.0e9),
            ..Default::default()
        };
        let plan = generate_suggested_build(&prov, &goals);
        assert_eq!(plan.buildings, prov.buildings);
        assert_eq!(plan.rebuilt_acres, 0);
    }

    #[test]
    fn test_income_floor_stops_at_attempt_cap() {
        let prov = province(Race::Orc, Buildings::new().with(BuildingId::Homes, 10_000));
        let goals = BuildGoals {
            min_net_income: Some(1.0e9),
            ..Default::default()
        };
        let plan = generate_suggested_build(&prov, &goals);
        assert_eq!(plan.buildings.get(BuildingId::Banks), MAX_INCOME_ATTEMPTS);
        assert_eq!(plan.buildings.get(BuildingId::Homes), 10_000 - MAX_INCOME_ATTEMPTS);
        assert_eq!(plan.rebuilt_acres, 200);
        assert!(plan.evaluation.net_income < 1.0e9);
    }

    #[test]
    fn test_offense_focus() {
        let prov = province(Race::Human, Buildings::new().with(BuildingId::Homes, 100));
        let goals = BuildGoals {
            focus: BuildFocus::Offense,
            ..Default::default()
        };
        let plan = generate_suggested_build(&prov, &goals);
        assert_eq!(plan.buildings.get(BuildingId::TrainingGrounds), 18);
        assert!(plan.evaluation.mod_offense >= 0.0);
    }

    #[test]
    fn test_offense_focus_respects_restriction() {
        let prov = province(Race::Elf, Buildings::new().with(BuildingId::Homes, 100));
        let goals = BuildGoals {
            focus: BuildFocus::Offense,
            ..Default::default()
        };
        let plan = generate_suggested_build(&prov, &goals);
        assert_eq!(plan.buildings.get(BuildingId::TrainingGrounds), 0);
        assert_eq!(plan.rebuilt_acres, 0);
    }

    #[test]
    fn test_tm_focus_uses_larger_guild_floor() {
        let prov = province(Race::Human, Buildings::new().with(BuildingId::Homes, 100));
        let tm = BuildGoals {
            focus: BuildFocus::Tm,
            ..Default::default()
        };
        assert_eq!(
            generate_suggested_build(&prov, &tm).buildings.get(BuildingId::Guilds),
            16
        );

        let tm_high = BuildGoals {
            focus: BuildFocus::Tm,
            min_guilds_percent: Some(25.0),
            ..Default::default()
        };
        assert_eq!(
            generate_suggested_build(&prov, &tm_high).buildings.get(BuildingId::Guilds),
            25
        );
    }

    #[test]
    fn test_changes_lists_differences() {
        let prov = province(Race::Human, Buildings::new().with(BuildingId::Homes, 100));
        let goals = BuildGoals {
            focus: BuildFocus::Offense,
            ..Default::default()
        };
        let plan = generate_suggested_build(&prov, &goals);
        let changes = plan.changes(&prov.buildings);
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].building, BuildingId::Homes);
        assert_eq!(changes[0].delta(), -18);
        assert_eq!(changes[1].building, BuildingId::TrainingGrounds);
        assert_eq!(changes[1].delta(), 18);
    }

    #[test]
    fn test_input_not_mutated() {
        let prov = province(Race::Human, Buildings::new().with(BuildingId::Homes, 100));
        let snapshot = prov.clone();
        let goals = BuildGoals {
            focus: BuildFocus::Tm,
            no_starvation: true,
            min_net_income: Some(10_000.0),
            ..Default::default()
        };
        let _ = generate_suggested_build(&prov, &goals);
        assert_eq!(prov, snapshot);
    }

    #[test]
    fn test_goals_json() {
        let goals: BuildGoals =
            serde_json::from_str(r#"{"focus":"TM","min_wpa":0.8,"no_starvation":true}"#).unwrap();
        assert_eq!(goals.focus, BuildFocus::Tm);
        assert_eq!(goals.min_wpa, Some(0.8));
        assert!(goals.no_starvation);
        assert_eq!(goals.effective_min_guilds_percent(), 10.0);
        assert_eq!(goals.effective_min_tds_percent(), 0.0);
    }
}
