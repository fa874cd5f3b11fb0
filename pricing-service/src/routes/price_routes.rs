use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::controllers::price_controller::PriceController;
use crate::models::price::PriceResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Query string del lookup: `?vehicleId={id}`
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: i64,
}

pub fn create_price_router() -> Router<AppState> {
    Router::new().route("/price", get(get_price))
}

async fn get_price(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<PriceResponse>, AppError> {
    let controller = PriceController::new(state.repository.clone());
    let response = controller.get_price(query.vehicle_id).await?;
    Ok(Json(response))
}
