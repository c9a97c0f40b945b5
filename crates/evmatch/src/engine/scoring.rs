//! Weighted multi-criteria scoring of a single vehicle against one buyer.
//!
//! Each category produces a raw 0-10 score; the buyer's priority weights
//! turn those into a 0-100 composite. Categories whose weight is zero drop
//! out of both the numerator and the attainable maximum, so an ignored
//! category never dilutes the rest.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::VehicleRecord;
use crate::preferences::{PriorityWeights, UserPreferences};

const RAW_MAX: f64 = 10.0;
const BRAND_BONUS: f64 = 5.0;

/// The scored categories, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Range,
    ChargingSpeed,
    Efficiency,
    Acceleration,
    TechFeatures,
    Safety,
    Reliability,
    Cargo,
}

impl ScoreCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Range => "Range",
            Self::ChargingSpeed => "Charging Speed",
            Self::Efficiency => "Efficiency",
            Self::Acceleration => "Acceleration",
            Self::TechFeatures => "Tech Features",
            Self::Safety => "Safety",
            Self::Reliability => "Reliability",
            Self::Cargo => "Cargo Space",
        }
    }
}

/// One vehicle's score against one buyer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    /// 0-100 composite, brand bonus included, clamped at 100.
    pub final_score: f64,
    /// Raw 0-10 per-category scores before weighting.
    pub category_scores: BTreeMap<ScoreCategory, f64>,
    pub brand_bonus: f64,
}

pub fn score_vehicle(vehicle: &VehicleRecord, prefs: &UserPreferences) -> ScoreCard {
    let mut category_scores = BTreeMap::new();
    category_scores.insert(ScoreCategory::Range, range_score(vehicle, prefs));
    category_scores.insert(ScoreCategory::ChargingSpeed, charging_score(vehicle));
    category_scores.insert(ScoreCategory::Efficiency, efficiency_score(vehicle));
    category_scores.insert(ScoreCategory::Acceleration, acceleration_score(vehicle));
    category_scores.insert(ScoreCategory::TechFeatures, tech_score(vehicle));
    category_scores.insert(ScoreCategory::Safety, vehicle.safety_rating * 2.0);
    category_scores.insert(ScoreCategory::Reliability, vehicle.reliability_rating * 2.0);
    category_scores.insert(ScoreCategory::Cargo, cargo_score(vehicle, prefs));

    let mut weighted_total = 0.0;
    let mut max_possible = 0.0;
    for (category, raw) in &category_scores {
        let weight = f64::from(category_weight(&prefs.weights, *category));
        weighted_total += raw * weight;
        max_possible += RAW_MAX * weight;
    }

    let base = if max_possible > 0.0 {
        weighted_total / max_possible * 100.0
    } else {
        0.0
    };

    let brand_bonus = if prefs.preferred_brands.iter().any(|brand| brand == &vehicle.brand) {
        BRAND_BONUS
    } else {
        0.0
    };

    ScoreCard {
        final_score: (base + brand_bonus).min(100.0),
        category_scores,
        brand_bonus,
    }
}

fn category_weight(weights: &PriorityWeights, category: ScoreCategory) -> u8 {
    match category {
        ScoreCategory::Range => weights.range,
        ScoreCategory::ChargingSpeed => weights.charging_speed,
        ScoreCategory::Efficiency => weights.efficiency,
        ScoreCategory::Acceleration => weights.acceleration,
        ScoreCategory::TechFeatures => weights.tech_features,
        ScoreCategory::Safety => weights.safety,
        ScoreCategory::Reliability => weights.reliability,
        ScoreCategory::Cargo => weights.cargo,
    }
}

// Range is judged against the buyer's daily commute, not in absolute terms.
fn range_score(vehicle: &VehicleRecord, prefs: &UserPreferences) -> f64 {
    let commute = prefs.daily_commute_km;
    let range = vehicle.range_km;
    if range >= commute * 5.0 {
        10.0
    } else if range >= commute * 3.0 {
        8.0
    } else if range >= commute * 2.0 {
        6.0
    } else if range >= commute * 1.5 {
        4.0
    } else {
        2.0
    }
}

fn charging_score(vehicle: &VehicleRecord) -> f64 {
    let kw = vehicle.dc_charging_kw;
    if kw >= 250.0 {
        10.0
    } else if kw >= 200.0 {
        8.0
    } else if kw >= 150.0 {
        6.0
    } else if kw >= 100.0 {
        4.0
    } else {
        2.0
    }
}

fn efficiency_score(vehicle: &VehicleRecord) -> f64 {
    let consumption = vehicle.kwh_per_100km;
    if consumption <= 14.0 {
        10.0
    } else if consumption <= 16.0 {
        8.0
    } else if consumption <= 18.0 {
        6.0
    } else if consumption <= 20.0 {
        4.0
    } else {
        2.0
    }
}

fn acceleration_score(vehicle: &VehicleRecord) -> f64 {
    let seconds = vehicle.zero_to_100_s;
    if seconds <= 3.5 {
        10.0
    } else if seconds <= 4.5 {
        8.0
    } else if seconds <= 5.5 {
        6.0
    } else if seconds <= 7.0 {
        4.0
    } else {
        2.0
    }
}

fn cargo_score(vehicle: &VehicleRecord, prefs: &UserPreferences) -> f64 {
    let cargo = vehicle.cargo_liters;
    let needed = prefs.min_cargo_liters;
    if cargo >= needed * 2.0 {
        10.0
    } else if cargo >= needed * 1.5 {
        8.0
    } else if cargo >= needed {
        6.0
    } else {
        4.0
    }
}

fn tech_score(vehicle: &VehicleRecord) -> f64 {
    let mut score: f64 = 0.0;
    if vehicle.autopilot {
        score += 3.0;
    }
    if vehicle.ota_updates {
        score += 2.0;
    }
    if vehicle.heat_pump {
        score += 2.0;
    }
    if vehicle.v2l {
        score += 2.0;
    }
    if vehicle.v2h {
        score += 1.0;
    }
    score.min(RAW_MAX)
}
