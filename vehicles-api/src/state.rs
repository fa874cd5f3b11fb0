//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: el pool de la base, la configuración y los
//! clientes de los servicios externos.

use std::sync::Arc;

use sqlx::PgPool;

use crate::clients::{MapsApi, PricingApi};
use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub pricing: Arc<dyn PricingApi>,
    pub maps: Arc<dyn MapsApi>,
}

impl AppState {
    pub fn new(
        pool: PgPool,
        config: EnvironmentConfig,
        pricing: Arc<dyn PricingApi>,
        maps: Arc<dyn MapsApi>,
    ) -> Self {
        Self {
            pool,
            config,
            pricing,
            maps,
        }
    }
}
