//! Building efficiency (BE) — the employment-driven multiplier most other
//! calculations scale by.
//!
//! BE = 0.5 × (1 + job fill ratio) × (1 + race BE bonus), where the fill
//! ratio is available workers over optimal workers (67% of all jobs),
//! capped at 1. A province with no jobs counts as fully staffed.

use serde::{Deserialize, Serialize};

use crate::constants::efficiency::{BASE, OPTIMAL_JOBS_FACTOR};
use crate::province::Province;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobStats {
    pub total_jobs: u64,
    pub optimal_workers: u64,
    pub available_workers: u64,
    pub filled_jobs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeResult {
    /// Always positive; 1.0 is 100%.
    pub be: f64,
    pub jobs: JobStats,
}

pub fn calculate_be(prov: &Province) -> BeResult {
    let total_jobs = prov.buildings.total_jobs();
    let available_workers = prov.peasants + prov.prisoners / 2;
    let optimal_workers = (total_jobs as f64 * OPTIMAL_JOBS_FACTOR).floor() as u64;

    let fill_ratio = if optimal_workers > 0 {
        (available_workers as f64 / optimal_workers as f64).min(1.0)
    } else {
        1.0
    };

    let race_bonus = prov.race.def().mods.be;
    let be = BASE * (1.0 + fill_ratio) * (1.0 + race_bonus);

    BeResult {
        be,
        jobs: JobStats {
            total_jobs,
            optimal_workers,
            available_workers,
            filled_jobs: available_workers.min(total_jobs),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buildings::{BuildingId, Buildings};
    use crate::races::Race;

    fn province(buildings: Buildings, peasants: u64) -> Province {
        let mut prov = Province {
            acres: buildings.total() as u32,
            buildings,
            peasants,
            ..Default::default()
        };
        prov.sync_land();
        prov
    }

    #[test]
    fn test_farm_scenario() {
        let prov = province(Buildings::new().with(BuildingId::Farms, 1000), 500);
        let result = calculate_be(&prov);
        assert_eq!(result.jobs.total_jobs, 25_000);
        assert_eq!(result.jobs.optimal_workers, 16_750);
        assert_eq!(result.jobs.available_workers, 500);
        assert_eq!(result.jobs.filled_jobs, 500);
        let expected = 0.5 * (1.0 + 500.0 / 16_750.0);
        assert!((result.be - expected).abs() < 1e-12);
        assert!((result.be - 0.5149).abs() < 1e-4);
    }

    #[test]
    fn test_no_jobs_is_fully_staffed() {
        let prov = province(Buildings::new().with(BuildingId::Homes, 200), 0);
        assert_eq!(calculate_be(&prov).be, 1.0);

        let dwarf = Province {
            race: Race::Dwarf,
            ..prov.clone()
        };
        assert!((calculate_be(&dwarf).be - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_empty_province() {
        let result = calculate_be(&Province::default());
        assert_eq!(result.be, 1.0);
        assert_eq!(result.jobs.total_jobs, 0);
        assert_eq!(result.jobs.filled_jobs, 0);
    }

    #[test]
    fn test_overstaffed_caps_at_race_bonus() {
        let mut prov = province(Buildings::new().with(BuildingId::Banks, 100), 10_000);
        prov.race = Race::Faery;
        let result = calculate_be(&prov);
        assert!((result.be - 0.95).abs() < 1e-12);
        assert_eq!(result.jobs.filled_jobs, 2_500);
    }

    #[test]
    fn test_prisoners_count_as_half_workers() {
        let mut prov = province(Buildings::new().with(BuildingId::Farms, 100), 0);
        prov.prisoners = 301;
        assert_eq!(calculate_be(&prov).jobs.available_workers, 150);
    }
}
