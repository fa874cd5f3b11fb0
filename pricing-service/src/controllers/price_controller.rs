//! Lookup de quotes de precio

use crate::models::price::PriceResponse;
use crate::repositories::price_repository::PriceRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct PriceController {
    repository: PriceRepository,
}

impl PriceController {
    pub fn new(repository: PriceRepository) -> Self {
        Self { repository }
    }

    pub async fn get_price(&self, vehicle_id: i64) -> AppResult<PriceResponse> {
        self.repository
            .find_by_vehicle_id(vehicle_id)
            .await
            .map(PriceResponse::from)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Price for vehicle with id '{}' not found",
                    vehicle_id
                ))
            })
    }
}
