use serde::{Deserialize, Serialize};

/// Drivetrain family a vehicle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Powertrain {
    #[serde(rename = "EV")]
    Ev,
    #[serde(rename = "PHEV")]
    Phev,
}

impl Powertrain {
    pub const fn label(self) -> &'static str {
        match self {
            Powertrain::Ev => "EV",
            Powertrain::Phev => "PHEV",
        }
    }
}

/// Body styles carried by catalog records and requested in preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    Sedan,
    Suv,
    Hatchback,
    Truck,
    Crossover,
    Wagon,
    Minivan,
}

impl BodyType {
    pub const fn label(self) -> &'static str {
        match self {
            BodyType::Sedan => "sedan",
            BodyType::Suv => "suv",
            BodyType::Hatchback => "hatchback",
            BodyType::Truck => "truck",
            BodyType::Crossover => "crossover",
            BodyType::Wagon => "wagon",
            BodyType::Minivan => "minivan",
        }
    }

    /// Whether the body style falls under the lower federal price cap.
    pub const fn is_compact(self) -> bool {
        matches!(self, BodyType::Sedan | BodyType::Hatchback)
    }
}

/// A fully-resolved catalog entry.
///
/// Records are resolved once at ingestion: every numeric field the engine
/// reads carries a concrete value, with documented defaults substituted for
/// anything a sync import left out (see `catalog::import`). The only `Option`
/// fields are the PHEV-specific ones, which have no meaning for an EV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub powertrain: Powertrain,
    pub body_type: BodyType,
    pub year: u16,
    pub base_price: f64,
    /// Electric range in km. For a PHEV this is the battery-only range.
    pub range_km: f64,
    pub battery_kwh: f64,
    pub dc_charging_kw: f64,
    pub kwh_per_100km: f64,
    /// Liquid-fuel consumption, PHEV only.
    pub fuel_l_per_100km: Option<f64>,
    /// Combined electric + fuel range, PHEV only.
    pub combined_range_km: Option<f64>,
    pub zero_to_100_s: f64,
    pub top_speed_kmh: f64,
    pub horsepower: u32,
    pub torque_nm: u32,
    pub cargo_liters: f64,
    pub curb_weight_kg: u32,
    pub seats: u8,
    pub awd: bool,
    pub towing_capacity_kg: u32,
    /// NCAP-style rating on a 0-5 scale.
    pub safety_rating: f64,
    /// Owner-survey reliability on a 0-5 scale.
    pub reliability_rating: f64,
    pub autopilot: bool,
    pub ota_updates: bool,
    pub heat_pump: bool,
    pub v2l: bool,
    pub v2h: bool,
    pub frunk_liters: f64,
    /// Assembled in North America; drives the federal origin penalty.
    pub made_in_north_america: bool,
    pub battery_sourcing_compliant: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_body_styles_match_federal_cap_tiers() {
        assert!(BodyType::Sedan.is_compact());
        assert!(BodyType::Hatchback.is_compact());
        assert!(!BodyType::Suv.is_compact());
        assert!(!BodyType::Truck.is_compact());
    }

    #[test]
    fn powertrain_serializes_with_uppercase_tags() {
        let json = serde_json::to_string(&Powertrain::Phev).expect("serialize");
        assert_eq!(json, "\"PHEV\"");
    }
}
