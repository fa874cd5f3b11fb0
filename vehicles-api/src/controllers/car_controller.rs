//! Orquestación del recurso Car
//!
//! CRUD contra el store de vehículos más el enriquecimiento de lectura:
//! en cada `get_by_id` se consultan los servicios de pricing y maps y los
//! resultados se mezclan en la respuesta sin persistirse nunca.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::warn;
use validator::Validate;

use crate::clients::{MapsApi, PricingApi};
use crate::dto::car_dto::{CarRequest, CarResponse};
use crate::models::car::Car;
use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::{not_found_error, AppResult};

/// Placeholder cuando el servicio de pricing no responde; el request de
/// lectura no falla por un upstream caído
const PRICE_UNAVAILABLE: &str = "(consult price)";

pub struct CarController {
    repository: CarRepository,
    pricing: Arc<dyn PricingApi>,
    maps: Arc<dyn MapsApi>,
}

impl CarController {
    pub fn new(pool: PgPool, pricing: Arc<dyn PricingApi>, maps: Arc<dyn MapsApi>) -> Self {
        Self {
            repository: CarRepository::new(pool),
            pricing,
            maps,
        }
    }

    /// Lista todos los vehículos sin enriquecer (sin precio ni dirección)
    pub async fn list(&self) -> AppResult<Vec<CarResponse>> {
        let cars = self.repository.find_all().await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    /// Lectura individual enriquecida: precio y dirección se recalculan en
    /// cada llamada contra los servicios externos
    pub async fn get_by_id(&self, id: i64) -> AppResult<CarResponse> {
        let car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", id))?;

        Ok(self.enrich(car).await)
    }

    pub async fn create(&self, request: CarRequest) -> AppResult<CarResponse> {
        request.validate()?;
        let car = self.repository.create(&request).await?;
        Ok(CarResponse::from(car))
    }

    /// Reemplaza solo condición/detalles/ubicación; el precio y la dirección
    /// no forman parte del merge
    pub async fn update(&self, id: i64, request: CarRequest) -> AppResult<CarResponse> {
        request.validate()?;
        let car = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Car", id))?;

        Ok(CarResponse::from(car))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Car", id))?;

        Ok(())
    }

    /// Mezcla los resultados de pricing y maps en la respuesta. Las dos
    /// llamadas son independientes y se emiten en paralelo; un fallo de
    /// upstream degrada el campo correspondiente sin fallar el request.
    async fn enrich(&self, car: Car) -> CarResponse {
        let (price, address) = tokio::join!(
            self.pricing.price_for(car.id),
            self.maps.address_for(car.latitude, car.longitude),
        );

        let mut response = CarResponse::from(car);

        response.price = Some(match price {
            Ok(price) => price,
            Err(e) => {
                warn!("Pricing service unavailable: {}", e);
                PRICE_UNAVAILABLE.to_string()
            }
        });

        response.location.address = match address {
            Ok(address) => Some(address),
            Err(e) => {
                warn!("Maps service unavailable: {}", e);
                None
            }
        };

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ClientError;
    use crate::models::car::Condition;
    use async_trait::async_trait;
    use chrono::Utc;
    use sqlx::postgres::PgPoolOptions;

    struct FixedPricing(&'static str);

    #[async_trait]
    impl PricingApi for FixedPricing {
        async fn price_for(&self, _vehicle_id: i64) -> Result<String, ClientError> {
            Ok(self.0.to_string())
        }
    }

    struct DownPricing;

    #[async_trait]
    impl PricingApi for DownPricing {
        async fn price_for(&self, _vehicle_id: i64) -> Result<String, ClientError> {
            Err(ClientError::Status(reqwest::StatusCode::NOT_FOUND))
        }
    }

    struct FixedMaps(&'static str);

    #[async_trait]
    impl MapsApi for FixedMaps {
        async fn address_for(&self, _lat: f64, _lon: f64) -> Result<String, ClientError> {
            Ok(self.0.to_string())
        }
    }

    struct DownMaps;

    #[async_trait]
    impl MapsApi for DownMaps {
        async fn address_for(&self, _lat: f64, _lon: f64) -> Result<String, ClientError> {
            Err(ClientError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
        }
    }

    fn controller(pricing: Arc<dyn PricingApi>, maps: Arc<dyn MapsApi>) -> CarController {
        // Pool lazy: no abre conexiones, el enrich no toca la base
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/cars_test")
            .unwrap();
        CarController::new(pool, pricing, maps)
    }

    fn sample_car() -> Car {
        Car {
            id: 1,
            condition: Condition::Used,
            manufacturer: "Chevrolet".to_string(),
            model: "Impala".to_string(),
            body: "sedan".to_string(),
            color: "white".to_string(),
            mileage: 32280,
            model_year: 2018,
            latitude: 1.0,
            longitude: 1.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn enrich_merges_price_and_address() {
        let controller = controller(
            Arc::new(FixedPricing("$20,000.00")),
            Arc::new(FixedMaps("123 Main St")),
        );

        let response = controller.enrich(sample_car()).await;

        assert_eq!(response.price.as_deref(), Some("$20,000.00"));
        assert_eq!(response.location.address.as_deref(), Some("123 Main St"));
        // Los campos persistidos no cambian
        assert_eq!(response.id, 1);
        assert_eq!(response.details.manufacturer, "Chevrolet");
        assert_eq!(response.location.lat, 1.0);
        assert_eq!(response.location.lon, 1.0);
    }

    #[tokio::test]
    async fn enrich_degrades_price_when_pricing_is_down() {
        let controller = controller(Arc::new(DownPricing), Arc::new(FixedMaps("123 Main St")));

        let response = controller.enrich(sample_car()).await;

        assert_eq!(response.price.as_deref(), Some(PRICE_UNAVAILABLE));
        assert_eq!(response.location.address.as_deref(), Some("123 Main St"));
    }

    #[tokio::test]
    async fn enrich_omits_address_when_maps_is_down() {
        let controller = controller(Arc::new(FixedPricing("USD 8999.00")), Arc::new(DownMaps));

        let response = controller.enrich(sample_car()).await;

        assert_eq!(response.price.as_deref(), Some("USD 8999.00"));
        assert!(response.location.address.is_none());
    }
}
