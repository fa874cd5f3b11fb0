//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: puerto del servidor
//! y URLs de los servicios externos de pricing y maps.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub pricing_api_url: String,
    pub maps_api_url: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            pricing_api_url: env::var("PRICING_API_URL")
                .unwrap_or_else(|_| "http://localhost:8082".to_string()),
            maps_api_url: env::var("MAPS_API_URL")
                .unwrap_or_else(|_| "http://localhost:9191".to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
