use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use evmatch::{
    recommend_powertrain, PowertrainAdvice, RankedVehicle, UserPreferences, VehicleRecord,
};

use crate::infra::{AppState, EngineState};

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    #[serde(flatten)]
    pub(crate) preferences: UserPreferences,
    /// Cap on how many ranked vehicles come back; omitted means all of them.
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendationResponse {
    pub(crate) count: usize,
    pub(crate) results: Vec<RankedVehicle>,
    pub(crate) advisor: PowertrainAdvice,
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogResponse {
    pub(crate) count: usize,
    pub(crate) vehicles: Vec<VehicleRecord>,
}

pub(crate) fn with_engine_routes(engine: Arc<EngineState>) -> axum::Router {
    axum::Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/catalog", get(catalog_endpoint))
        .route("/api/v1/recommendations", post(recommendations_endpoint))
        .route("/api/v1/advisor", post(advisor_endpoint))
        .layer(Extension(engine))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalog_endpoint(
    Extension(engine): Extension<Arc<EngineState>>,
) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        count: engine.catalog.len(),
        vehicles: engine.catalog.vehicles().to_vec(),
    })
}

pub(crate) async fn recommendations_endpoint(
    Extension(engine): Extension<Arc<EngineState>>,
    Json(payload): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    let RecommendationRequest { preferences, limit } = payload;

    let mut results = engine
        .recommender
        .recommend(engine.catalog.vehicles(), &preferences);
    if let Some(limit) = limit {
        results.truncate(limit);
    }
    let advisor = recommend_powertrain(&preferences);

    Json(RecommendationResponse {
        count: results.len(),
        results,
        advisor,
    })
}

pub(crate) async fn advisor_endpoint(
    Json(preferences): Json<UserPreferences>,
) -> Json<PowertrainAdvice> {
    Json(recommend_powertrain(&preferences))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use evmatch::{CatalogProvider, Confidence, PowertrainChoice, Region};
    use tower::ServiceExt;

    fn engine() -> Arc<EngineState> {
        Arc::new(EngineState::new(CatalogProvider::builtin()))
    }

    #[tokio::test]
    async fn recommendations_endpoint_ranks_and_limits() {
        let request = RecommendationRequest {
            preferences: UserPreferences {
                region: Region::UsaCalifornia,
                max_budget: 60_000.0,
                ..UserPreferences::default()
            },
            limit: Some(3),
        };

        let Json(body) = recommendations_endpoint(Extension(engine()), Json(request)).await;

        assert!(body.count <= 3);
        assert_eq!(body.count, body.results.len());
        for pair in body.results.windows(2) {
            assert!(pair[0].score.final_score >= pair[1].score.final_score);
        }
    }

    #[tokio::test]
    async fn advisor_endpoint_returns_the_powertrain_call() {
        let prefs = UserPreferences {
            daily_commute_km: 75.0,
            ..UserPreferences::default()
        };

        let Json(advice) = advisor_endpoint(Json(prefs)).await;

        assert_eq!(advice.recommendation, PowertrainChoice::Ev);
        assert_eq!(advice.confidence, Confidence::High);
    }

    #[tokio::test]
    async fn catalog_route_serves_the_full_catalog() {
        let app = with_engine_routes(engine());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/catalog")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert!(body["count"].as_u64().expect("count") > 10);
        assert!(body["vehicles"].as_array().expect("vehicles").iter().any(
            |vehicle| vehicle["id"] == "tesla_model_3_sr"
        ));
    }

    #[tokio::test]
    async fn health_route_is_always_ok() {
        let app = with_engine_routes(engine());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn recommendations_route_accepts_a_flat_payload() {
        let app = with_engine_routes(engine());

        let payload = json!({
            "region": "canada_quebec",
            "max_budget": 55000,
            "limit": 5
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/recommendations")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert!(body["count"].as_u64().expect("count") <= 5);
        assert!(body["advisor"]["recommendation"].is_string());
    }
}
