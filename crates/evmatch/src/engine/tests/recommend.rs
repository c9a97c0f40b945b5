use super::common::*;
use crate::catalog::CatalogProvider;
use crate::engine::recommend::Recommender;
use crate::preferences::Region;

#[test]
fn results_are_sorted_by_score_descending() {
    let recommender = Recommender::new();
    let vehicles = vec![modest_ev(), flagship_ev(), suburban_phev()];

    let ranked = recommender.recommend(&vehicles, &prefs());

    assert!(!ranked.is_empty());
    for pair in ranked.windows(2) {
        assert!(pair[0].score.final_score >= pair[1].score.final_score);
    }
    assert_eq!(ranked[0].vehicle.id, "flagship_ev");
}

#[test]
fn equal_scores_keep_catalog_order() {
    let first = flagship_ev();
    let mut second = flagship_ev();
    second.id = "flagship_ev_twin".to_string();
    second.name = "Flagship EV Twin".to_string();

    let recommender = Recommender::new();
    let ranked = recommender.recommend(&[first, second], &prefs());

    assert_eq!(ranked[0].vehicle.id, "flagship_ev");
    assert_eq!(ranked[1].vehicle.id, "flagship_ev_twin");
}

#[test]
fn every_result_carries_score_and_cost() {
    let catalog = CatalogProvider::builtin();
    let mut prefs = prefs();
    prefs.max_budget = 120_000.0;
    prefs.region = Region::CanadaQuebec;

    let recommender = Recommender::new();
    let ranked = recommender.recommend(catalog.vehicles(), &prefs);

    assert!(!ranked.is_empty());
    for entry in &ranked {
        assert!(entry.score.final_score >= 0.0 && entry.score.final_score <= 100.0);
        assert!(entry.tco.total_cost.is_finite());
        assert_eq!(
            entry.tco.incentive,
            recommender.incentives().resolve(&entry.vehicle, prefs.region)
        );
    }
}

#[test]
fn filtered_vehicles_never_appear_in_results() {
    let catalog = CatalogProvider::builtin();
    let mut prefs = prefs();
    prefs.max_budget = 45_000.0;

    let ranked = Recommender::new().recommend(catalog.vehicles(), &prefs);

    for entry in &ranked {
        assert!(entry.vehicle.base_price <= 45_000.0 * 1.1);
    }
}

#[test]
fn recommendation_is_deterministic() {
    let catalog = CatalogProvider::builtin();
    let recommender = Recommender::new();
    let prefs = prefs();

    let first = recommender.recommend(catalog.vehicles(), &prefs);
    let second = recommender.recommend(catalog.vehicles(), &prefs);

    assert_eq!(first, second);
}
