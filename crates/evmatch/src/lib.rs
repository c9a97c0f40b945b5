//! Decision engine recommending electric and plug-in-hybrid vehicles.
//!
//! The crate is split into a catalog layer (static records plus an optional
//! sync-file merge), a preferences model describing one buyer, and the engine
//! itself: hard-constraint filtering, weighted multi-criteria scoring, a
//! regional incentive resolver, a total-cost-of-ownership model, and a
//! powertrain advisor. Every engine computation is a pure function of its
//! inputs; the crate holds no process-wide state.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod preferences;
pub mod telemetry;

pub use catalog::{BodyType, CatalogProvider, MergeStats, Powertrain, VehicleRecord};
pub use engine::advisor::{recommend_powertrain, Confidence, PowertrainAdvice, PowertrainChoice};
pub use engine::incentives::IncentiveTable;
pub use engine::recommend::{RankedVehicle, Recommender};
pub use engine::scoring::{ScoreCard, ScoreCategory};
pub use engine::tco::TcoBreakdown;
pub use preferences::{ChargingTier, LongTripFrequency, PriorityWeights, Region, UserPreferences};
