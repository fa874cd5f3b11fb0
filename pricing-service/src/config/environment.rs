//! Configuración de variables de entorno

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub seed_prices: i64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8082".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            seed_prices: env::var("PRICE_SEED_COUNT")
                .unwrap_or_else(|_| "19".to_string())
                .parse()
                .expect("PRICE_SEED_COUNT must be a valid number"),
        }
    }
}

impl EnvironmentConfig {
    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
