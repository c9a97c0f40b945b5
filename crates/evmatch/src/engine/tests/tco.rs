use super::common::*;
use crate::engine::tco::TcoCalculator;
use crate::preferences::Region;

#[test]
fn ev_breakdown_matches_hand_computed_lines() {
    let calc = TcoCalculator::default();
    let vehicle = flagship_ev();
    let prefs = prefs();

    let tco = calc.breakdown(&vehicle, &prefs);

    assert_eq!(tco.list_price, 41_500.0);
    assert_eq!(tco.incentive, 7_500.0);
    assert_eq!(tco.net_price, 34_000.0);
    // 14 kWh/100km over 20 000 km at 0.15/kWh.
    assert!((tco.annual_energy_cost - 420.0).abs() < 1e-9);
    assert!((tco.annual_maintenance - 600.0).abs() < 1e-9);
    assert_eq!(tco.annual_insurance, 1_800.0 + 400.0);
    assert_eq!(tco.annual_registration, 150.0);
    assert!((tco.resale_value - 15_300.0).abs() < 1e-9);
    assert!((tco.depreciation - 18_700.0).abs() < 1e-9);
    assert_eq!(
        tco.total_cost,
        tco.depreciation
            + tco.total_energy_cost
            + tco.total_maintenance
            + tco.total_insurance
            + tco.total_registration
    );
    assert_eq!(tco.cost_per_km, tco.total_cost / 100_000.0);
    assert_eq!(tco.cost_per_year, tco.total_cost / 5.0);
}

#[test]
fn california_energy_cost_for_efficient_ev() {
    let calc = TcoCalculator::default();
    let mut vehicle = flagship_ev();
    vehicle.kwh_per_100km = 13.7;
    let mut prefs = prefs();
    prefs.region = Region::UsaCalifornia;

    let tco = calc.breakdown(&vehicle, &prefs);

    assert!((tco.annual_energy_cost - 411.0).abs() < 1e-9);
    assert_eq!(tco.incentive, 9_500.0);
}

#[test]
fn phev_electric_ratio_steps_with_battery_range() {
    let calc = TcoCalculator::default();
    let prefs = prefs();

    // Range covers the full commute: 70% electric.
    let covers = suburban_phev();
    let covers_cost = calc.breakdown(&covers, &prefs).annual_energy_cost;
    let expected_70 = (22.0 / 100.0) * 14_000.0 * 0.15 + (6.0 / 100.0) * 6_000.0 * 1.5;
    assert!((covers_cost - expected_70).abs() < 1e-9);

    // Range covers half the commute: 50% electric.
    let mut half = suburban_phev();
    half.range_km = 30.0;
    let half_cost = calc.breakdown(&half, &prefs).annual_energy_cost;
    let expected_50 = (22.0 / 100.0) * 10_000.0 * 0.15 + (6.0 / 100.0) * 10_000.0 * 1.5;
    assert!((half_cost - expected_50).abs() < 1e-9);

    // Range covers less than half: 30% electric.
    let mut short = suburban_phev();
    short.range_km = 20.0;
    let short_cost = calc.breakdown(&short, &prefs).annual_energy_cost;
    let expected_30 = (22.0 / 100.0) * 6_000.0 * 0.15 + (6.0 / 100.0) * 14_000.0 * 1.5;
    assert!((short_cost - expected_30).abs() < 1e-9);
}

#[test]
fn net_price_can_go_negative_under_large_incentives() {
    let calc = TcoCalculator::default();
    let mut vehicle = flagship_ev();
    vehicle.base_price = 5_000.0;
    let mut prefs = prefs();
    prefs.region = Region::UsaColorado;

    let tco = calc.breakdown(&vehicle, &prefs);

    assert_eq!(tco.incentive, 12_500.0);
    assert!(tco.net_price < 0.0);
    assert!(tco.total_cost.is_finite());
}

#[test]
fn zero_distance_and_zero_horizon_guard_the_unit_rates() {
    let calc = TcoCalculator::default();
    let vehicle = flagship_ev();

    let mut no_driving = prefs();
    no_driving.annual_km = 0.0;
    let tco = calc.breakdown(&vehicle, &no_driving);
    assert_eq!(tco.cost_per_km, 0.0);
    assert_eq!(tco.annual_energy_cost, 0.0);

    let mut no_horizon = prefs();
    no_horizon.ownership_years = 0;
    let tco = calc.breakdown(&vehicle, &no_horizon);
    assert_eq!(tco.cost_per_km, 0.0);
    assert_eq!(tco.cost_per_year, 0.0);
}

#[test]
fn breakdown_is_idempotent() {
    let calc = TcoCalculator::default();
    let vehicle = suburban_phev();
    let prefs = prefs();

    let first = calc.breakdown(&vehicle, &prefs);
    let second = calc.breakdown(&vehicle, &prefs);

    assert_eq!(first, second);
}

#[test]
fn ice_baseline_reflects_fuel_and_maintenance_assumptions() {
    let calc = TcoCalculator::default();
    let vehicle = flagship_ev();
    let prefs = prefs();

    let tco = calc.breakdown(&vehicle, &prefs);

    let expected = 20_000.0
        + (9.0 / 100.0) * 20_000.0 * 1.5 * 5.0
        + 0.07 * 20_000.0 * 5.0
        + 1_500.0 * 5.0
        + 150.0 * 5.0;
    assert!((tco.ice_baseline - expected).abs() < 1e-9);
    assert_eq!(tco.savings_vs_ice, tco.ice_baseline - tco.total_cost);
}
