//! Repositorio de la tabla cars

use crate::dto::car_dto::CarRequest;
use crate::models::car::Car;
use crate::utils::errors::AppResult;
use chrono::Utc;
use sqlx::PgPool;

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserta un vehículo nuevo; el id lo asigna la base de datos
    pub async fn create(&self, request: &CarRequest) -> AppResult<Car> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (condition, manufacturer, model, body, color, mileage, model_year, latitude, longitude, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
            RETURNING *
            "#,
        )
        .bind(request.condition)
        .bind(&request.details.manufacturer)
        .bind(&request.details.model)
        .bind(&request.details.body)
        .bind(&request.details.color)
        .bind(request.details.mileage)
        .bind(request.details.model_year)
        .bind(request.location.lat)
        .bind(request.location.lon)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(car)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Car>> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Car>> {
        let cars = sqlx::query_as::<_, Car>("SELECT * FROM cars ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(cars)
    }

    /// Reemplaza los grupos condición/detalles/ubicación del registro.
    /// created_at se preserva; updated_at se actualiza. Devuelve None si el
    /// id no existe.
    pub async fn update(&self, id: i64, request: &CarRequest) -> AppResult<Option<Car>> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET condition = $2, manufacturer = $3, model = $4, body = $5, color = $6,
                mileage = $7, model_year = $8, latitude = $9, longitude = $10, updated_at = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.condition)
        .bind(&request.details.manufacturer)
        .bind(&request.details.model)
        .bind(&request.details.body)
        .bind(&request.details.color)
        .bind(request.details.mileage)
        .bind(request.details.model_year)
        .bind(request.location.lat)
        .bind(request.location.lon)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(car)
    }

    /// Devuelve None si el id no existe
    pub async fn delete(&self, id: i64) -> AppResult<Option<i64>> {
        let deleted: Option<(i64,)> = sqlx::query_as("DELETE FROM cars WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(deleted.map(|row| row.0))
    }
}
