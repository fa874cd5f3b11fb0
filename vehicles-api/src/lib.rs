//! Vehicles API
//!
//! Servicio CRUD de vehículos. Las lecturas individuales se enriquecen en
//! cada llamada con el precio (servicio de pricing) y la dirección resuelta
//! (servicio de maps); ninguno de los dos campos se persiste.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use middleware::cors::cors_middleware;
use state::AppState;

/// Construye el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_endpoint))
        .nest("/cars", routes::car_routes::create_car_router())
        .layer(cors_middleware())
        .with_state(state)
}

/// Health check del servicio
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "vehicles-api",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
