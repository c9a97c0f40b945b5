use super::common::*;
use crate::engine::scoring::{score_vehicle, ScoreCategory};

#[test]
fn vehicle_topping_every_ladder_scores_one_hundred() {
    let card = score_vehicle(&flagship_ev(), &prefs());

    for (category, raw) in &card.category_scores {
        assert_eq!(*raw, 10.0, "category {category:?}");
    }
    assert_eq!(card.final_score, 100.0);
    assert_eq!(card.brand_bonus, 0.0);
}

#[test]
fn mid_ladder_vehicle_matches_hand_computed_composite() {
    let card = score_vehicle(&modest_ev(), &prefs());

    assert_eq!(card.category_scores[&ScoreCategory::Range], 4.0);
    assert_eq!(card.category_scores[&ScoreCategory::ChargingSpeed], 4.0);
    assert_eq!(card.category_scores[&ScoreCategory::Efficiency], 4.0);
    assert_eq!(card.category_scores[&ScoreCategory::Acceleration], 4.0);
    assert_eq!(card.category_scores[&ScoreCategory::TechFeatures], 0.0);
    assert_eq!(card.category_scores[&ScoreCategory::Safety], 8.0);
    assert_eq!(card.category_scores[&ScoreCategory::Reliability], 7.0);
    assert_eq!(card.category_scores[&ScoreCategory::Cargo], 6.0);

    // Weighted by the default priorities: 122 of 250 attainable points.
    assert!((card.final_score - 48.8).abs() < 1e-9);
}

#[test]
fn brand_bonus_cannot_push_past_one_hundred() {
    let mut prefs = prefs();
    prefs.preferred_brands = vec!["Aurora".to_string()];

    let card = score_vehicle(&flagship_ev(), &prefs);

    assert_eq!(card.brand_bonus, 5.0);
    assert_eq!(card.final_score, 100.0);
}

#[test]
fn all_zero_weights_leave_only_the_brand_bonus() {
    let mut prefs = prefs();
    prefs.weights.range = 0;
    prefs.weights.charging_speed = 0;
    prefs.weights.efficiency = 0;
    prefs.weights.acceleration = 0;
    prefs.weights.tech_features = 0;
    prefs.weights.safety = 0;
    prefs.weights.reliability = 0;
    prefs.weights.cargo = 0;

    let plain = score_vehicle(&flagship_ev(), &prefs);
    assert_eq!(plain.final_score, 0.0);

    prefs.preferred_brands = vec!["Aurora".to_string()];
    let preferred = score_vehicle(&flagship_ev(), &prefs);
    assert_eq!(preferred.final_score, 5.0);
}

#[test]
fn zero_weight_category_does_not_dilute_the_rest() {
    let mut vehicle = flagship_ev();
    vehicle.cargo_liters = 0.0;

    let mut prefs = prefs();
    prefs.weights.cargo = 0;

    let card = score_vehicle(&vehicle, &prefs);
    assert_eq!(card.final_score, 100.0);
}

#[test]
fn range_ladder_is_relative_to_the_commute() {
    let vehicle = modest_ev();

    let mut short_commute = prefs();
    short_commute.daily_commute_km = 16.0;
    let card = score_vehicle(&vehicle, &short_commute);
    assert_eq!(card.category_scores[&ScoreCategory::Range], 10.0);

    let mut long_commute = prefs();
    long_commute.daily_commute_km = 120.0;
    let card = score_vehicle(&vehicle, &long_commute);
    assert_eq!(card.category_scores[&ScoreCategory::Range], 2.0);
}

#[test]
fn tech_score_caps_at_ten() {
    let vehicle = flagship_ev();
    let card = score_vehicle(&vehicle, &prefs());
    assert_eq!(card.category_scores[&ScoreCategory::TechFeatures], 10.0);
}

#[test]
fn final_score_stays_within_bounds_for_builtin_catalog() {
    let catalog = crate::catalog::CatalogProvider::builtin();
    let prefs = prefs();
    for vehicle in catalog.vehicles() {
        let card = score_vehicle(vehicle, &prefs);
        assert!(card.final_score >= 0.0 && card.final_score <= 100.0, "{}", vehicle.id);
    }
}
