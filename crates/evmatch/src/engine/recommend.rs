//! The end-to-end recommendation pipeline: filter, score, cost, rank.

use serde::Serialize;

use crate::catalog::VehicleRecord;
use crate::engine::filter::filter_candidates;
use crate::engine::incentives::IncentiveTable;
use crate::engine::scoring::{score_vehicle, ScoreCard};
use crate::engine::tco::{TcoBreakdown, TcoCalculator};
use crate::preferences::UserPreferences;

/// One ranked result: the vehicle, its score card, and its ownership-cost
/// breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedVehicle {
    pub vehicle: VehicleRecord,
    pub score: ScoreCard,
    pub tco: TcoBreakdown,
}

/// Stateless orchestrator over the engine stages. Construction fixes the
/// incentive schedule; everything else arrives per request.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    tco: TcoCalculator,
}

impl Recommender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_incentives(incentives: IncentiveTable) -> Self {
        Self {
            tco: TcoCalculator::new(incentives),
        }
    }

    pub fn incentives(&self) -> &IncentiveTable {
        self.tco.incentives()
    }

    pub fn tco(&self) -> &TcoCalculator {
        &self.tco
    }

    /// Filter, score, and cost every candidate, then rank by score
    /// descending. The sort is stable, so equally scored vehicles keep
    /// their catalog order.
    pub fn recommend(
        &self,
        vehicles: &[VehicleRecord],
        prefs: &UserPreferences,
    ) -> Vec<RankedVehicle> {
        let mut ranked: Vec<RankedVehicle> = filter_candidates(vehicles, prefs)
            .into_iter()
            .map(|vehicle| RankedVehicle {
                vehicle: vehicle.clone(),
                score: score_vehicle(vehicle, prefs),
                tco: self.tco.breakdown(vehicle, prefs),
            })
            .collect();

        ranked.sort_by(|a, b| b.score.final_score.total_cmp(&a.score.final_score));
        ranked
    }
}
