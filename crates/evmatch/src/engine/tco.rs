//! Total-cost-of-ownership model over the configured ownership horizon.

use serde::Serialize;

use crate::catalog::{Powertrain, VehicleRecord};
use crate::engine::incentives::IncentiveTable;
use crate::preferences::{Region, UserPreferences};

const DELIVERY_FEE: f64 = 1_500.0;

const EV_MAINTENANCE_PER_KM: f64 = 0.03;
const PHEV_MAINTENANCE_PER_KM: f64 = 0.05;

const EV_RESALE_FRACTION: f64 = 0.45;
const PHEV_RESALE_FRACTION: f64 = 0.40;

const EV_ANNUAL_REGISTRATION: f64 = 150.0;
const PHEV_ANNUAL_REGISTRATION: f64 = 200.0;

// Comparison ICE sedan: 40k purchase losing half its value, 9 L/100km.
const ICE_PRICE: f64 = 40_000.0;
const ICE_DEPRECIATION_FRACTION: f64 = 0.5;
const ICE_L_PER_100KM: f64 = 9.0;
const ICE_MAINTENANCE_PER_KM: f64 = 0.07;
const ICE_ANNUAL_INSURANCE: f64 = 1_500.0;
const ICE_ANNUAL_REGISTRATION: f64 = 150.0;

/// Every line of the ownership-cost estimate for one vehicle. Annual figures
/// are pre-multiplication; `total_cost` covers the full horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TcoBreakdown {
    pub list_price: f64,
    pub incentive: f64,
    /// List price minus incentive. Can go below zero when the incentive
    /// exceeds the price; the depreciation line absorbs it.
    pub net_price: f64,
    pub annual_energy_cost: f64,
    pub annual_maintenance: f64,
    pub annual_insurance: f64,
    pub annual_registration: f64,
    pub total_energy_cost: f64,
    pub total_maintenance: f64,
    pub total_insurance: f64,
    pub total_registration: f64,
    pub resale_value: f64,
    pub depreciation: f64,
    pub total_cost: f64,
    pub ice_baseline: f64,
    pub savings_vs_ice: f64,
    pub cost_per_km: f64,
    pub cost_per_year: f64,
}

/// Ownership-cost calculator. Pure: calling it twice with the same inputs
/// yields identical breakdowns.
#[derive(Debug, Clone, Default)]
pub struct TcoCalculator {
    incentives: IncentiveTable,
}

impl TcoCalculator {
    pub fn new(incentives: IncentiveTable) -> Self {
        Self { incentives }
    }

    pub fn incentives(&self) -> &IncentiveTable {
        &self.incentives
    }

    pub fn breakdown(&self, vehicle: &VehicleRecord, prefs: &UserPreferences) -> TcoBreakdown {
        let years = f64::from(prefs.ownership_years);

        let list_price = vehicle.base_price + DELIVERY_FEE;
        let incentive = self.incentives.resolve(vehicle, prefs.region);
        let net_price = list_price - incentive;

        let annual_energy_cost = annual_energy_cost(vehicle, prefs);
        let maintenance_rate = match vehicle.powertrain {
            Powertrain::Ev => EV_MAINTENANCE_PER_KM,
            Powertrain::Phev => PHEV_MAINTENANCE_PER_KM,
        };
        let annual_maintenance = maintenance_rate * prefs.annual_km;
        let annual_insurance = regional_insurance_base(prefs.region) + vehicle.base_price / 100.0;
        let annual_registration = match vehicle.powertrain {
            Powertrain::Ev => EV_ANNUAL_REGISTRATION,
            Powertrain::Phev => PHEV_ANNUAL_REGISTRATION,
        };

        let total_energy_cost = annual_energy_cost * years;
        let total_maintenance = annual_maintenance * years;
        let total_insurance = annual_insurance * years;
        let total_registration = annual_registration * years;

        let resale_fraction = match vehicle.powertrain {
            Powertrain::Ev => EV_RESALE_FRACTION,
            Powertrain::Phev => PHEV_RESALE_FRACTION,
        };
        let resale_value = net_price * resale_fraction;
        let depreciation = net_price - resale_value;

        let total_cost = depreciation
            + total_energy_cost
            + total_maintenance
            + total_insurance
            + total_registration;

        let ice_baseline = ice_baseline(prefs, years);
        let savings_vs_ice = ice_baseline - total_cost;

        let total_km = prefs.annual_km * years;
        let cost_per_km = if total_km > 0.0 { total_cost / total_km } else { 0.0 };
        let cost_per_year = if years > 0.0 { total_cost / years } else { 0.0 };

        TcoBreakdown {
            list_price,
            incentive,
            net_price,
            annual_energy_cost,
            annual_maintenance,
            annual_insurance,
            annual_registration,
            total_energy_cost,
            total_maintenance,
            total_insurance,
            total_registration,
            resale_value,
            depreciation,
            total_cost,
            ice_baseline,
            savings_vs_ice,
            cost_per_km,
            cost_per_year,
        }
    }
}

fn annual_energy_cost(vehicle: &VehicleRecord, prefs: &UserPreferences) -> f64 {
    match vehicle.powertrain {
        Powertrain::Ev => {
            (vehicle.kwh_per_100km / 100.0) * prefs.annual_km * prefs.electricity_cost_kwh
        }
        Powertrain::Phev => {
            // Electric share grows with how much of the daily commute the
            // battery alone can cover.
            let electric_ratio = if vehicle.range_km >= prefs.daily_commute_km {
                0.70
            } else if vehicle.range_km >= prefs.daily_commute_km * 0.5 {
                0.50
            } else {
                0.30
            };
            let electric_km = prefs.annual_km * electric_ratio;
            let gas_km = prefs.annual_km * (1.0 - electric_ratio);
            let electric_cost =
                (vehicle.kwh_per_100km / 100.0) * electric_km * prefs.electricity_cost_kwh;
            let fuel_l_per_100km = vehicle.fuel_l_per_100km.unwrap_or(6.0);
            let fuel_cost = (fuel_l_per_100km / 100.0) * gas_km * prefs.fuel_cost_liter;
            electric_cost + fuel_cost
        }
    }
}

fn ice_baseline(prefs: &UserPreferences, years: f64) -> f64 {
    let depreciation = ICE_PRICE * ICE_DEPRECIATION_FRACTION;
    let fuel = (ICE_L_PER_100KM / 100.0) * prefs.annual_km * prefs.fuel_cost_liter * years;
    let maintenance = ICE_MAINTENANCE_PER_KM * prefs.annual_km * years;
    let insurance = ICE_ANNUAL_INSURANCE * years;
    let registration = ICE_ANNUAL_REGISTRATION * years;
    depreciation + fuel + maintenance + insurance + registration
}

fn regional_insurance_base(region: Region) -> f64 {
    match region {
        Region::UsaFederal => 1_800.0,
        Region::UsaCalifornia => 2_000.0,
        Region::UsaColorado => 1_700.0,
        Region::UsaNewJersey => 2_100.0,
        Region::UsaNewYork => 2_200.0,
        Region::UsaTexas => 1_600.0,
        Region::CanadaFederal => 1_400.0,
        Region::CanadaQuebec => 1_200.0,
        Region::CanadaBc => 1_300.0,
        Region::CanadaOntario => 1_350.0,
        Region::Uk => 900.0,
        Region::Germany => 800.0,
        Region::France => 850.0,
        Region::Netherlands => 950.0,
        Region::Norway => 1_000.0,
        Region::Australia => 1_100.0,
        Region::Portugal => 700.0,
    }
}
