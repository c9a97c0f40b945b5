//! Regional purchase-incentive resolution.

use std::collections::BTreeMap;

use crate::catalog::{Powertrain, VehicleRecord};
use crate::preferences::Region;

/// One region's incentive program.
#[derive(Debug, Clone)]
pub struct IncentiveProgram {
    pub ev_amount: f64,
    pub phev_amount: f64,
    pub label: &'static str,
    /// Programs that include the US federal credit also inherit its price
    /// caps and assembly-origin reduction.
    pub federal_family: bool,
}

/// The incentive schedule. The eligibility rules (price caps, origin
/// reduction) are data on the table rather than knowledge baked into the
/// resolver, so a schedule revision is a constructor change only.
#[derive(Debug, Clone)]
pub struct IncentiveTable {
    programs: BTreeMap<Region, IncentiveProgram>,
    /// Price cap for sedans and hatchbacks under federal-family programs.
    compact_price_cap: f64,
    /// Price cap for every other body style under federal-family programs.
    standard_price_cap: f64,
    /// Multiplier applied when the vehicle is not assembled in North
    /// America, under federal-family programs.
    origin_multiplier: f64,
}

impl Default for IncentiveTable {
    fn default() -> Self {
        Self::current()
    }
}

impl IncentiveTable {
    /// The schedule in effect for the 2024-2025 model years.
    pub fn current() -> Self {
        let mut programs = BTreeMap::new();
        let mut add = |region, ev_amount, phev_amount, label, federal_family| {
            programs.insert(
                region,
                IncentiveProgram {
                    ev_amount,
                    phev_amount,
                    label,
                    federal_family,
                },
            );
        };

        add(Region::UsaFederal, 7_500.0, 3_750.0, "Federal Tax Credit", true);
        add(Region::UsaCalifornia, 9_500.0, 5_750.0, "Federal + CVRP", true);
        add(Region::UsaColorado, 12_500.0, 6_250.0, "Federal + CO Tax Credit", true);
        add(Region::UsaNewJersey, 11_500.0, 3_750.0, "Federal + Charge Up NJ", true);
        add(Region::UsaNewYork, 10_000.0, 4_250.0, "Federal + Drive Clean", true);
        add(Region::UsaTexas, 10_000.0, 6_250.0, "Federal + TX Rebate", true);
        add(Region::CanadaFederal, 5_000.0, 2_500.0, "iZEV Federal", false);
        add(Region::CanadaQuebec, 12_000.0, 7_500.0, "iZEV + Roulez Vert", false);
        add(Region::CanadaBc, 9_000.0, 4_500.0, "iZEV + CleanBC", false);
        add(Region::CanadaOntario, 5_000.0, 2_500.0, "iZEV Federal", false);
        add(Region::Uk, 1_500.0, 0.0, "Plug-in Grant", false);
        add(Region::Germany, 4_500.0, 0.0, "Umweltbonus", false);
        add(Region::France, 5_000.0, 0.0, "Bonus Ecologique", false);
        add(Region::Netherlands, 2_950.0, 0.0, "SEPP Subsidy", false);
        add(Region::Norway, 0.0, 0.0, "VAT Exempt (25% savings)", false);
        add(Region::Australia, 3_000.0, 0.0, "State Rebates", false);

        Self {
            programs,
            compact_price_cap: 55_000.0,
            standard_price_cap: 80_000.0,
            origin_multiplier: 0.5,
        }
    }

    /// The program for a region, if one exists.
    pub fn program(&self, region: Region) -> Option<&IncentiveProgram> {
        self.programs.get(&region)
    }

    /// The incentive amount a vehicle qualifies for in a region. Always
    /// non-negative; regions without a program resolve to zero.
    pub fn resolve(&self, vehicle: &VehicleRecord, region: Region) -> f64 {
        let Some(program) = self.programs.get(&region) else {
            return 0.0;
        };

        let base = match vehicle.powertrain {
            Powertrain::Ev => program.ev_amount,
            Powertrain::Phev => program.phev_amount,
        };

        if !program.federal_family {
            return base;
        }

        let cap = if vehicle.body_type.is_compact() {
            self.compact_price_cap
        } else {
            self.standard_price_cap
        };
        if vehicle.base_price > cap {
            return 0.0;
        }

        if vehicle.made_in_north_america {
            base
        } else {
            base * self.origin_multiplier
        }
    }
}
