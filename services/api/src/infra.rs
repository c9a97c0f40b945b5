use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;

use evmatch::{BodyType, CatalogProvider, Recommender, Region};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog and recommender shared by every request. Both are immutable once
/// the server is up; the sync merge happens before this is constructed.
pub(crate) struct EngineState {
    pub(crate) catalog: CatalogProvider,
    pub(crate) recommender: Recommender,
}

impl EngineState {
    pub(crate) fn new(catalog: CatalogProvider) -> Self {
        Self {
            catalog,
            recommender: Recommender::new(),
        }
    }
}

pub(crate) fn parse_region(raw: &str) -> Result<Region, String> {
    serde_json::from_value(Value::String(raw.trim().to_lowercase()))
        .map_err(|_| format!("unknown region '{raw}' (expected e.g. usa_california, canada_bc)"))
}

pub(crate) fn parse_body_type(raw: &str) -> Result<BodyType, String> {
    serde_json::from_value(Value::String(raw.trim().to_lowercase()))
        .map_err(|_| format!("unknown body type '{raw}' (expected e.g. sedan, suv, hatchback)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_region_codes_case_insensitively() {
        assert_eq!(parse_region("USA_California").expect("parses"), Region::UsaCalifornia);
        assert!(parse_region("narnia").is_err());
    }

    #[test]
    fn parses_body_types() {
        assert_eq!(parse_body_type("suv").expect("parses"), BodyType::Suv);
        assert!(parse_body_type("dirigible").is_err());
    }
}
