//! Modelo de Car
//!
//! Este módulo contiene el struct Car que mapea exactamente a la tabla
//! `cars` del schema PostgreSQL. El precio y la dirección resuelta NO son
//! columnas: se recalculan en cada lectura individual contra los servicios
//! de pricing y maps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Condición del vehículo - mapea al ENUM car_condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "car_condition", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    Used,
    New,
}

/// Car persistido - mapea exactamente a la tabla cars
#[derive(Debug, Clone, FromRow)]
pub struct Car {
    pub id: i64,
    pub condition: Condition,
    pub manufacturer: String,
    pub model: String,
    pub body: String,
    pub color: String,
    pub mileage: i32,
    pub model_year: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
