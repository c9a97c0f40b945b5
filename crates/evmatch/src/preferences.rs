//! Immutable snapshot of one buyer's needs, budget, and priorities.

use serde::{Deserialize, Serialize};

use crate::catalog::BodyType;

/// Incentive/insurance region. A closed set: invalid codes are rejected at
/// construction (deserialization) instead of silently defaulting inside a
/// formula. Regions absent from a lookup table resolve to that table's
/// conservative fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    UsaFederal,
    UsaCalifornia,
    UsaColorado,
    UsaNewJersey,
    UsaNewYork,
    UsaTexas,
    CanadaFederal,
    CanadaQuebec,
    CanadaBc,
    CanadaOntario,
    Uk,
    Germany,
    France,
    Netherlands,
    Norway,
    Australia,
    Portugal,
}

/// How often the buyer drives beyond a single charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongTripFrequency {
    Never,
    Rarely,
    Monthly,
    Weekly,
}

/// Home charging circuit tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargingTier {
    Level1,
    Level2,
}

/// Buyer-assigned priorities, each 1-5. Eight of these weight the scoring
/// categories; `zero_emissions` is consumed only by the powertrain advisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityWeights {
    pub range: u8,
    pub charging_speed: u8,
    pub efficiency: u8,
    pub acceleration: u8,
    pub tech_features: u8,
    pub safety: u8,
    pub reliability: u8,
    pub cargo: u8,
    pub zero_emissions: u8,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            range: 3,
            charging_speed: 3,
            efficiency: 3,
            acceleration: 2,
            tech_features: 3,
            safety: 4,
            reliability: 4,
            cargo: 3,
            zero_emissions: 3,
        }
    }
}

/// One recommendation request's worth of buyer context. Constructed by the
/// caller, read-only to the engine. Degenerate values (max below min budget,
/// all-zero weights, empty body-type set) are tolerated, never fatal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub daily_commute_km: f64,
    pub annual_km: f64,
    pub long_trips: LongTripFrequency,
    /// `None` means no home charging at all.
    pub home_charging: Option<ChargingTier>,
    pub work_charging: bool,
    pub min_budget: f64,
    pub max_budget: f64,
    pub region: Region,
    pub ownership_years: u32,
    pub electricity_cost_kwh: f64,
    pub fuel_cost_liter: f64,
    /// Requested body styles; an empty set falls back to sedan at filter time.
    pub body_types: Vec<BodyType>,
    pub min_seats: u8,
    pub min_cargo_liters: f64,
    pub needs_awd: bool,
    pub needs_towing: bool,
    pub min_towing_kg: u32,
    pub weights: PriorityWeights,
    pub preferred_brands: Vec<String>,
    pub excluded_brands: Vec<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            daily_commute_km: 50.0,
            annual_km: 20_000.0,
            long_trips: LongTripFrequency::Rarely,
            home_charging: Some(ChargingTier::Level2),
            work_charging: false,
            min_budget: 0.0,
            max_budget: 50_000.0,
            region: Region::UsaFederal,
            ownership_years: 5,
            electricity_cost_kwh: 0.15,
            fuel_cost_liter: 1.50,
            body_types: vec![BodyType::Sedan, BodyType::Suv],
            min_seats: 5,
            min_cargo_liters: 300.0,
            needs_awd: false,
            needs_towing: false,
            min_towing_kg: 0,
            weights: PriorityWeights::default(),
            preferred_brands: Vec::new(),
            excluded_brands: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_codes_round_trip_snake_case() {
        let json = serde_json::to_string(&Region::UsaCalifornia).expect("serialize");
        assert_eq!(json, "\"usa_california\"");
        let parsed: Region = serde_json::from_str("\"canada_quebec\"").expect("deserialize");
        assert_eq!(parsed, Region::CanadaQuebec);
    }

    #[test]
    fn unknown_region_code_is_rejected_at_construction() {
        assert!(serde_json::from_str::<Region>("\"atlantis\"").is_err());
    }

    #[test]
    fn preferences_deserialize_with_partial_payload() {
        let prefs: UserPreferences =
            serde_json::from_str(r#"{"region": "uk", "max_budget": 35000}"#).expect("deserialize");
        assert_eq!(prefs.region, Region::Uk);
        assert_eq!(prefs.max_budget, 35_000.0);
        assert_eq!(prefs.daily_commute_km, 50.0);
        assert_eq!(prefs.weights.safety, 4);
    }
}
