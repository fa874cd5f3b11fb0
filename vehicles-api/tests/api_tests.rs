use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use vehicles_api::clients::{ClientError, MapsApi, PricingApi};
use vehicles_api::config::environment::EnvironmentConfig;
use vehicles_api::create_app;
use vehicles_api::state::AppState;

struct StubPricing;

#[async_trait]
impl PricingApi for StubPricing {
    async fn price_for(&self, _vehicle_id: i64) -> Result<String, ClientError> {
        Ok("USD 20000.00".to_string())
    }
}

struct StubMaps;

#[async_trait]
impl MapsApi for StubMaps {
    async fn address_for(&self, _lat: f64, _lon: f64) -> Result<String, ClientError> {
        Ok("123 Main St".to_string())
    }
}

// App de test: pool lazy (sin conexión real) + clientes stub. Cubre las
// rutas que no tocan la base: health, rechazos de validación y de parseo.
fn create_test_app() -> axum::Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://postgres@localhost/cars_test")
        .unwrap();

    let config = EnvironmentConfig {
        environment: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 8080,
        pricing_api_url: "http://localhost:8082".to_string(),
        maps_api_url: "http://localhost:9191".to_string(),
    };

    let state = AppState::new(pool, config, Arc::new(StubPricing), Arc::new(StubMaps));
    create_app(state)
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["service"], "vehicles-api");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_car_rejects_invalid_payload() {
    let app = create_test_app();
    let payload = json!({
        "condition": "USED",
        "details": {
            "manufacturer": "Chevrolet",
            "model": "Impala",
            "body": "sedan",
            "color": "white",
            "mileage": -10,
            "model_year": 1500
        },
        "location": { "lat": 200.0, "lon": 1.0 }
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cars")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_car_rejects_missing_fields() {
    let app = create_test_app();
    let payload = json!({ "condition": "NEW" });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cars")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_car_rejects_non_numeric_id() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/cars/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/trucks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
