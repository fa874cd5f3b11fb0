//! Store en memoria de quotes de precio
//!
//! Mapa compartido vehicle_id -> Price detrás de un RwLock. Se siembra al
//! arranque con un rango de ids consecutivos y montos aleatorios en USD.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::price::Price;

#[derive(Clone, Default)]
pub struct PriceRepository {
    prices: Arc<RwLock<HashMap<i64, Price>>>,
}

impl PriceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Genera quotes para los ids 1..=count con montos aleatorios
    /// entre 5,000.00 y 40,000.00 USD
    pub async fn seed(&self, count: i64) {
        let mut prices = self.prices.write().await;
        let mut rng = rand::thread_rng();

        for vehicle_id in 1..=count {
            let cents = rng.gen_range(500_000..=4_000_000);
            prices.insert(
                vehicle_id,
                Price {
                    vehicle_id,
                    currency: "USD".to_string(),
                    price: Decimal::new(cents, 2),
                },
            );
        }

        info!("💰 {} quotes de precio generados", prices.len());
    }

    pub async fn find_by_vehicle_id(&self, vehicle_id: i64) -> Option<Price> {
        let prices = self.prices.read().await;
        prices.get(&vehicle_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.prices.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.prices.read().await.is_empty()
    }
}
