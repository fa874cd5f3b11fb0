use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::car_controller::CarController;
use crate::dto::car_dto::{CarRequest, CarResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_car))
        .route("/", get(list_cars))
        .route("/:id", get(get_car))
        .route("/:id", put(update_car))
        .route("/:id", delete(delete_car))
}

fn controller(state: &AppState) -> CarController {
    CarController::new(state.pool.clone(), state.pricing.clone(), state.maps.clone())
}

async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CarRequest>,
) -> Result<(StatusCode, Json<CarResponse>), AppError> {
    let response = controller(&state).create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<CarResponse>>, AppError> {
    let response = controller(&state).list().await?;
    Ok(Json(response))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CarResponse>, AppError> {
    let response = controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CarRequest>,
) -> Result<Json<CarResponse>, AppError> {
    let response = controller(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    controller(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
