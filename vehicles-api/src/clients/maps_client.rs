//! Cliente HTTP del servicio de maps
//!
//! Resuelve una dirección a partir de coordenadas aproximadas. El servicio
//! de referencia responde con una dirección elegida pseudo-aleatoriamente de
//! un set fijo: los callers no deben asumir idempotencia entre llamadas.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::ClientError;

/// Capacidad de resolver coordenadas a una dirección
#[async_trait]
pub trait MapsApi: Send + Sync {
    async fn address_for(&self, latitude: f64, longitude: f64) -> Result<String, ClientError>;
}

/// Body de respuesta del servicio de maps
#[derive(Debug, Deserialize)]
struct MapsAddress {
    address: String,
    city: String,
    state: String,
    zip: String,
}

impl MapsAddress {
    fn formatted(&self) -> String {
        format!("{}, {}, {} {}", self.address, self.city, self.state, self.zip)
    }
}

pub struct HttpMapsClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMapsClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }
}

#[async_trait]
impl MapsApi for HttpMapsClient {
    async fn address_for(&self, latitude: f64, longitude: f64) -> Result<String, ClientError> {
        let url = format!(
            "{}/maps?lat={}&lon={}",
            self.base_url, latitude, longitude
        );
        debug!("Resolviendo dirección: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let address: MapsAddress = response.json().await?;
        Ok(address.formatted())
    }
}
