//! Repositorio de coches
//!
//! Las lecturas normales van contra el pool. Las operaciones que forman
//! parte de la transacción de reserva (`lock_by_id`, `set_status_tx`)
//! reciben la transacción abierta: el bloqueo de la fila del coche y el
//! cambio de estado tienen que vivir en la misma unidad atómica que las
//! escrituras de rental y payment.

use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::car::{Car, CarStatus};
use crate::utils::errors::AppError;

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Coches reservables; el alias legacy 'Available' sigue contando
    pub async fn list_bookable(&self) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT * FROM cars WHERE status IN ('Free', 'Available') ORDER BY company, model",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn list_all(&self) -> Result<Vec<Car>, AppError> {
        let cars =
            sqlx::query_as::<_, Car>("SELECT * FROM cars ORDER BY status, company, model")
                .fetch_all(&self.pool)
                .await?;

        Ok(cars)
    }

    pub async fn number_plate_exists(
        &self,
        number_plate: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, AppError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM cars WHERE number_plate = $1 AND ($2::BIGINT IS NULL OR id != $2))",
        )
        .bind(number_plate)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn create(
        &self,
        model: String,
        company: String,
        number_plate: String,
        image_url: Option<String>,
        rent_per_day: Decimal,
        status: CarStatus,
    ) -> Result<Car, AppError> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (model, company, number_plate, image_url, rent_per_day, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(model)
        .bind(company)
        .bind(number_plate)
        .bind(image_url)
        .bind(rent_per_day)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(car)
    }

    pub async fn update(
        &self,
        id: i64,
        model: String,
        company: String,
        number_plate: String,
        image_url: Option<String>,
        rent_per_day: Decimal,
        status: CarStatus,
    ) -> Result<Car, AppError> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET model = $2, company = $3, number_plate = $4, image_url = $5,
                rent_per_day = $6, status = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(model)
        .bind(company)
        .bind(number_plate)
        .bind(image_url)
        .bind(rent_per_day)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::CarNotFound("Car not found".to_string()))?;

        Ok(car)
    }

    pub async fn update_status(&self, id: i64, status: CarStatus) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE cars SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::CarNotFound("Car not found".to_string()));
        }

        Ok(())
    }

    /// Hay una reserva vigente (cubre hoy) sobre este coche
    pub async fn has_current_rental(&self, id: i64) -> Result<bool, AppError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM rentals WHERE car_id = $1 AND return_date >= CURRENT_DATE)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::CarNotFound("Car not found".to_string()));
        }

        Ok(())
    }

    /// Bloquear la fila del coche dentro de la transacción (SELECT ... FOR UPDATE).
    /// Dos reservas concurrentes sobre el mismo coche se serializan aquí:
    /// la segunda espera el lock y ve el estado ya confirmado de la primera.
    pub async fn lock_by_id(
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
    ) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(car)
    }

    /// Cambiar el estado dentro de la transacción en curso
    pub async fn set_status_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
        status: CarStatus,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE cars SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}
