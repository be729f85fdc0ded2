//! Pure province economy logic for ProvPlan.
//!
//! This crate contains every calculation behind the province planner, free
//! of any UI, import format or runtime. Functions take a [`Province`]
//! snapshot plus the compiled-in rule tables and return plain result
//! records, making them unit-testable and safe to call from any thread.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`buildings`] | Building types, rule-table entries, the `Buildings` layout map |
//! | [`constants`] | Jobs, efficiency, economy, food and wage constants |
//! | [`efficiency`] | Building efficiency (BE) from employment and race |
//! | [`evaluation`] | Layout scoring used by the planner, parallel batch scoring |
//! | [`food`] | Farm/barren production vs. consumption, next-tick stock |
//! | [`income`] | Peasant employment, prisoner and Bank income |
//! | [`military`] | Raw offense/defense, OME/DME |
//! | [`personalities`] | Personality modifiers and starting bonuses |
//! | [`planner`] | Goal-driven build suggestions under a rebuild budget |
//! | [`population`] | Maximum population from living space |
//! | [`province`] | The province snapshot, validation, layout cloning |
//! | [`races`] | Race unit stats, modifiers, building restrictions |
//! | [`summary`] | Dashboard summary and baseline/current comparison |
//! | [`wages`] | Military wages with rate, race and Armouries modifiers |
//!
//! [`Province`]: province::Province

pub mod buildings;
pub mod constants;
pub mod efficiency;
pub mod evaluation;
pub mod food;
pub mod income;
pub mod military;
pub mod personalities;
pub mod planner;
pub mod population;
pub mod province;
pub mod races;
pub mod summary;
pub mod wages;
