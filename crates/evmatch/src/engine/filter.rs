//! Hard-constraint filtering ahead of scoring.

use crate::catalog::{BodyType, VehicleRecord};
use crate::preferences::UserPreferences;

/// How far past the stated maximum budget a vehicle may stretch and still
/// be shown. Incentives frequently close a gap of this size.
const BUDGET_STRETCH: f64 = 1.1;

/// Drop every vehicle that violates a hard constraint. Order-preserving:
/// the survivors are a subsequence of the input.
pub fn filter_candidates<'a>(
    vehicles: &'a [VehicleRecord],
    prefs: &UserPreferences,
) -> Vec<&'a VehicleRecord> {
    let fallback_body_types = [BodyType::Sedan];
    let body_types: &[BodyType] = if prefs.body_types.is_empty() {
        &fallback_body_types
    } else {
        &prefs.body_types
    };

    vehicles
        .iter()
        .filter(|vehicle| {
            if vehicle.base_price > prefs.max_budget * BUDGET_STRETCH {
                return false;
            }
            if vehicle.base_price < prefs.min_budget {
                return false;
            }
            if !body_types.contains(&vehicle.body_type) {
                return false;
            }
            if vehicle.seats < prefs.min_seats {
                return false;
            }
            if prefs.needs_awd && !vehicle.awd {
                return false;
            }
            if prefs.needs_towing && vehicle.towing_capacity_kg < prefs.min_towing_kg {
                return false;
            }
            if prefs.excluded_brands.iter().any(|brand| brand == &vehicle.brand) {
                return false;
            }
            true
        })
        .collect()
}
