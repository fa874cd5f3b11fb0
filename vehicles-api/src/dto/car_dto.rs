//! DTOs del recurso Car
//!
//! El payload de escritura (`CarRequest`) solo transporta los grupos
//! condición/detalles/ubicación. El precio y la dirección resuelta viven
//! únicamente en `CarResponse` y se completan en las lecturas individuales.

use crate::models::car::{Car, Condition};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para crear o actualizar un vehículo.
///
/// Campos desconocidos del caller (por ejemplo `price` o `location.address`)
/// se descartan al deserializar y nunca llegan al store.
#[derive(Debug, Deserialize, Validate)]
pub struct CarRequest {
    pub condition: Condition,

    #[validate]
    pub details: CarDetails,

    #[validate]
    pub location: LocationInput,
}

/// Grupo de detalles del vehículo
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CarDetails {
    #[validate(length(min = 1, max = 100))]
    pub manufacturer: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 1, max = 50))]
    pub body: String,

    #[validate(length(min = 1, max = 50))]
    pub color: String,

    #[validate(range(min = 0))]
    pub mileage: i32,

    #[validate(range(min = 1900, max = 2100))]
    pub model_year: i32,
}

/// Coordenadas de entrada
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LocationInput {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
}

/// Ubicación en la respuesta; `address` solo se completa en lecturas
/// individuales enriquecidas
#[derive(Debug, Clone, Serialize)]
pub struct LocationResponse {
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Response de vehículo para la API
#[derive(Debug, Clone, Serialize)]
pub struct CarResponse {
    pub id: i64,
    pub condition: Condition,
    pub details: CarDetails,
    pub location: LocationResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            condition: car.condition,
            details: CarDetails {
                manufacturer: car.manufacturer,
                model: car.model,
                body: car.body,
                color: car.color,
                mileage: car.mileage,
                model_year: car.model_year,
            },
            location: LocationResponse {
                lat: car.latitude,
                lon: car.longitude,
                address: None,
            },
            price: None,
        }
    }
}
