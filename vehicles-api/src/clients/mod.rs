//! Clients - HTTP Clients for External APIs
//!
//! This module contains HTTP clients for communicating with the pricing
//! and maps services. Each capability is a trait so the orchestration layer
//! can be exercised against stub implementations.

pub mod maps_client;
pub mod pricing_client;

pub use maps_client::{HttpMapsClient, MapsApi};
pub use pricing_client::{HttpPricingClient, PricingApi};

use thiserror::Error;

/// Errores de los clientes HTTP salientes
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
}
