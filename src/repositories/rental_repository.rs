//! Repositorio de reservas
//!
//! El alta de una reserva solo existe en forma transaccional: el insert
//! se hace siempre dentro de la unidad atómica del coordinador de reservas.

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool, Postgres, Transaction};

use crate::models::rental::Rental;
use crate::utils::errors::AppError;

/// Fila del listado de reservas de un cliente (join con cars)
#[derive(Debug, FromRow)]
pub struct CustomerRentalRow {
    pub id: i64,
    pub car_id: i64,
    pub car_model: String,
    pub company: String,
    pub rental_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// Fila del listado global de reservas (join con customers y cars)
#[derive(Debug, FromRow)]
pub struct RentalOverviewRow {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub car_id: i64,
    pub car_model: String,
    pub company: String,
    pub rental_date: NaiveDate,
    pub return_date: NaiveDate,
}

pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<CustomerRentalRow>, AppError> {
        let rows = sqlx::query_as::<_, CustomerRentalRow>(
            r#"
            SELECT r.id, r.car_id, c.model AS car_model, c.company,
                   r.rental_date, r.return_date
            FROM rentals r
            JOIN cars c ON r.car_id = c.id
            WHERE r.customer_id = $1
            ORDER BY r.rental_date DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn list_all(&self) -> Result<Vec<RentalOverviewRow>, AppError> {
        let rows = sqlx::query_as::<_, RentalOverviewRow>(
            r#"
            SELECT r.id, r.customer_id, cu.name AS customer_name,
                   r.car_id, c.model AS car_model, c.company,
                   r.rental_date, r.return_date
            FROM rentals r
            JOIN customers cu ON r.customer_id = cu.id
            JOIN cars c ON r.car_id = c.id
            ORDER BY r.rental_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Insertar la reserva dentro de la transacción en curso
    pub async fn insert_tx(
        tx: &mut Transaction<'_, Postgres>,
        customer_id: i64,
        car_id: i64,
        rental_date: NaiveDate,
        return_date: NaiveDate,
    ) -> Result<i64, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO rentals (customer_id, car_id, rental_date, return_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(customer_id)
        .bind(car_id)
        .bind(rental_date)
        .bind(return_date)
        .fetch_one(&mut **tx)
        .await?;

        Ok(id)
    }

    /// Bloquear la fila de la reserva dentro de la transacción
    pub async fn lock_by_id(
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
    ) -> Result<Option<Rental>, AppError> {
        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(rental)
    }

    /// Recortar la fecha de devolución dentro de la transacción. Nunca se
    /// extiende una reserva, solo se acorta; y para una reserva que aún no
    /// empezó el recorte se queda en `rental_date` (el schema exige
    /// `return_date >= rental_date`).
    pub async fn clamp_return_date_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
        today: NaiveDate,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE rentals
            SET return_date = GREATEST($2, rental_date)
            WHERE id = $1 AND return_date > GREATEST($2, rental_date)
            "#,
        )
        .bind(id)
        .bind(today)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
