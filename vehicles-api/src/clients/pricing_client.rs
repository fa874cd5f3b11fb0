//! Cliente HTTP del servicio de pricing
//!
//! Consulta `GET /services/price?vehicleId={id}` y devuelve el precio como
//! string ya formateado. El precio no se persiste: el servicio de pricing es
//! la fuente autoritativa y se consulta en cada lectura individual.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::ClientError;

/// Capacidad de resolver un precio para un vehículo
#[async_trait]
pub trait PricingApi: Send + Sync {
    async fn price_for(&self, vehicle_id: i64) -> Result<String, ClientError>;
}

/// Body de respuesta del servicio de pricing
#[derive(Debug, Deserialize)]
struct PriceQuote {
    currency: String,
    price: String,
}

impl PriceQuote {
    fn formatted(&self) -> String {
        format!("{} {}", self.currency, self.price)
    }
}

pub struct HttpPricingClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPricingClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }
}

#[async_trait]
impl PricingApi for HttpPricingClient {
    async fn price_for(&self, vehicle_id: i64) -> Result<String, ClientError> {
        let url = format!(
            "{}/services/price?vehicleId={}",
            self.base_url, vehicle_id
        );
        debug!("Consultando precio: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let quote: PriceQuote = response.json().await?;
        Ok(quote.formatted())
    }
}
