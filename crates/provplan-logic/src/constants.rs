//! Game constants.
//!
//! Plain numeric constants shared by every calculator. Per-building and
//! per-race numbers live in the rule tables ([`crate::buildings`],
//! [`crate::races`], [`crate::personalities`]).

pub mod age {
    /// One tick is one in-game hour.
    pub const TICKS_PER_DAY: f64 = 24.0;
}

pub mod jobs {
    /// Jobs offered by every completed non-Home building.
    pub const PER_COMPLETED_BUILDING: u64 = 25;
}

pub mod efficiency {
    /// Optimal workers = total jobs × this factor.
    pub const OPTIMAL_JOBS_FACTOR: f64 = 0.67;
    /// BE = BASE × (1 + job fill ratio) × (1 + race BE bonus).
    pub const BASE: f64 = 0.5;
}

pub mod economy {
    pub const GC_PER_EMPLOYED_PEASANT: f64 = 3.0;
    pub const GC_PER_UNEMPLOYED_PEASANT: f64 = 1.0;
    pub const GC_PER_PRISONER: f64 = 0.75;
    pub const GC_PER_BANK_FLAT: f64 = 25.0;
    /// Base build cost per acre = factor × (acres + offset).
    pub const BUILD_COST_FACTOR: f64 = 0.05;
    pub const BUILD_COST_ACRE_OFFSET: f64 = 10_000.0;
    /// Base raze cost per acre = base + factor × acres.
    pub const RAZE_COST_BASE: f64 = 300.0;
    pub const RAZE_COST_FACTOR: f64 = 0.05;
}

pub mod food {
    /// Bushels eaten per population point per tick.
    pub const CONSUMPTION_PER_POP: f64 = 0.25;
    /// Bushels per Farm per tick at 100% BE.
    pub const FARM_PRODUCTION: f64 = 60.0;
}

pub mod wages {
    //! Gold per unit per tick at 100% wages. Soldiers are unwaged.

    pub const SOLDIER: f64 = 0.0;
    pub const OFF_SPEC: f64 = 0.5;
    pub const DEF_SPEC: f64 = 0.5;
    pub const ELITE: f64 = 0.75;
}

pub mod military {
    /// OME/DME gained per 1% of land in Training Grounds/Forts at 100% BE.
    pub const PERCENT_PER_LAND_PERCENT: f64 = 1.5;
}
