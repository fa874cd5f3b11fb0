//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación: el store de
//! quotes en memoria y la configuración.

use crate::config::environment::EnvironmentConfig;
use crate::repositories::price_repository::PriceRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: PriceRepository,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(repository: PriceRepository, config: EnvironmentConfig) -> Self {
        Self { repository, config }
    }
}
