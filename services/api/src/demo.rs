use std::path::PathBuf;

use clap::Args;

use evmatch::error::AppError;
use evmatch::{
    recommend_powertrain, BodyType, CatalogProvider, PowertrainChoice, Recommender, Region,
    UserPreferences,
};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Incentive and insurance region (e.g. usa_california, canada_bc)
    #[arg(long, value_parser = crate::infra::parse_region, default_value = "usa_federal")]
    pub(crate) region: Region,
    /// Maximum budget before incentives
    #[arg(long, default_value_t = 50_000.0)]
    pub(crate) max_budget: f64,
    /// Minimum budget
    #[arg(long, default_value_t = 0.0)]
    pub(crate) min_budget: f64,
    /// One-way daily commute in km
    #[arg(long, default_value_t = 50.0)]
    pub(crate) commute_km: f64,
    /// Annual driving distance in km
    #[arg(long, default_value_t = 20_000.0)]
    pub(crate) annual_km: f64,
    /// Acceptable body styles; repeat the flag for more than one
    #[arg(long = "body-type", value_parser = crate::infra::parse_body_type)]
    pub(crate) body_types: Vec<BodyType>,
    /// Require all-wheel drive
    #[arg(long)]
    pub(crate) needs_awd: bool,
    /// Minimum seat count
    #[arg(long, default_value_t = 5)]
    pub(crate) seats: u8,
    /// Optional evdb_sync.json export merged before ranking
    #[arg(long)]
    pub(crate) sync: Option<PathBuf>,
    /// How many ranked vehicles to print
    #[arg(long, default_value_t = 5)]
    pub(crate) top: usize,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        region,
        max_budget,
        min_budget,
        commute_km,
        annual_km,
        body_types,
        needs_awd,
        seats,
        sync,
        top,
    } = args;

    let mut catalog = CatalogProvider::builtin();
    if let Some(path) = sync {
        let stats = catalog.merge_sync_path(&path)?;
        println!(
            "Merged {} ({} added, {} skipped)",
            path.display(),
            stats.added,
            stats.skipped
        );
    }

    let mut prefs = UserPreferences {
        region,
        max_budget,
        min_budget,
        daily_commute_km: commute_km,
        annual_km,
        needs_awd,
        min_seats: seats,
        ..UserPreferences::default()
    };
    if !body_types.is_empty() {
        prefs.body_types = body_types;
    }

    let ranked = Recommender::new().recommend(catalog.vehicles(), &prefs);
    if ranked.is_empty() {
        println!("No vehicles match the given constraints.");
        return Ok(());
    }

    println!(
        "Top matches for a {:.0} km commute, budget up to {:.0} ({:?})",
        prefs.daily_commute_km, prefs.max_budget, prefs.region
    );
    println!(
        "{:<4} {:<38} {:<5} {:>6} {:>10} {:>10} {:>12} {:>12}",
        "#", "Vehicle", "Type", "Score", "Price", "Incentive", "Total TCO", "vs ICE"
    );
    for (index, entry) in ranked.iter().take(top).enumerate() {
        println!(
            "{:<4} {:<38} {:<5} {:>6.1} {:>10.0} {:>10.0} {:>12.0} {:>+12.0}",
            index + 1,
            entry.vehicle.name,
            entry.vehicle.powertrain.label(),
            entry.score.final_score,
            entry.vehicle.base_price,
            entry.tco.incentive,
            entry.tco.total_cost,
            entry.tco.savings_vs_ice
        );
    }

    let advice = recommend_powertrain(&prefs);
    let label = match advice.recommendation {
        PowertrainChoice::Ev => "EV",
        PowertrainChoice::Phev => "PHEV",
        PowertrainChoice::Either => "Either",
    };
    println!(
        "\nPowertrain advice: {} ({:?} confidence, EV {:.0}% / PHEV {:.0}%)",
        label, advice.confidence, advice.ev_percentage, advice.phev_percentage
    );
    for reason in &advice.reasons_ev {
        println!("  + {reason}");
    }
    for reason in &advice.reasons_phev {
        println!("  - {reason}");
    }

    Ok(())
}
