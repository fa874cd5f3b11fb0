//! Pricing Service
//!
//! Servicio de quotes de precio por id de vehículo. Expone un único lookup
//! de lectura; el ciclo de vida de los quotes es interno (seed al arranque).

pub mod config;
pub mod controllers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use state::AppState;

/// Construye el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_endpoint))
        .nest("/services", routes::price_routes::create_price_router())
        .with_state(state)
}

/// Health check del servicio
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "pricing-service",
        "status": "healthy",
    }))
}
