use crate::catalog::{BodyType, Powertrain, VehicleRecord};
use crate::preferences::UserPreferences;

/// An EV that tops every scoring ladder under the default preferences.
pub(super) fn flagship_ev() -> VehicleRecord {
    VehicleRecord {
        id: "flagship_ev".to_string(),
        name: "Flagship EV".to_string(),
        brand: "Aurora".to_string(),
        powertrain: Powertrain::Ev,
        body_type: BodyType::Sedan,
        year: 2024,
        base_price: 40_000.0,
        range_km: 300.0,
        battery_kwh: 75.0,
        dc_charging_kw: 250.0,
        kwh_per_100km: 14.0,
        fuel_l_per_100km: None,
        combined_range_km: None,
        zero_to_100_s: 3.5,
        top_speed_kmh: 250.0,
        horsepower: 450,
        torque_nm: 650,
        cargo_liters: 600.0,
        curb_weight_kg: 2_000,
        seats: 5,
        awd: true,
        towing_capacity_kg: 1_500,
        safety_rating: 5.0,
        reliability_rating: 5.0,
        autopilot: true,
        ota_updates: true,
        heat_pump: true,
        v2l: true,
        v2h: true,
        frunk_liters: 80.0,
        made_in_north_america: true,
        battery_sourcing_compliant: true,
    }
}

/// An EV that lands mid-ladder on every category.
pub(super) fn modest_ev() -> VehicleRecord {
    VehicleRecord {
        id: "modest_ev".to_string(),
        name: "Modest EV".to_string(),
        brand: "Borealis".to_string(),
        range_km: 80.0,
        dc_charging_kw: 120.0,
        kwh_per_100km: 19.0,
        zero_to_100_s: 6.0,
        cargo_liters: 300.0,
        safety_rating: 4.0,
        reliability_rating: 3.5,
        autopilot: false,
        ota_updates: false,
        heat_pump: false,
        v2l: false,
        v2h: false,
        ..flagship_ev()
    }
}

pub(super) fn suburban_phev() -> VehicleRecord {
    VehicleRecord {
        id: "suburban_phev".to_string(),
        name: "Suburban PHEV".to_string(),
        brand: "Cascade".to_string(),
        powertrain: Powertrain::Phev,
        body_type: BodyType::Suv,
        base_price: 48_000.0,
        range_km: 68.0,
        fuel_l_per_100km: Some(6.0),
        combined_range_km: Some(900.0),
        dc_charging_kw: 50.0,
        kwh_per_100km: 22.0,
        ..flagship_ev()
    }
}

pub(super) fn prefs() -> UserPreferences {
    UserPreferences::default()
}
