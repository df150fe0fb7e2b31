//! Repositorio de pagos
//!
//! Un pago nace y se relee en la misma transacción que su reserva;
//! por eso todas las operaciones reciben la transacción abierta.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction};

use crate::models::payment::Payment;
use crate::utils::errors::AppError;

pub struct PaymentRepository;

impl PaymentRepository {
    /// Insertar el pago ligado a la reserva recién creada
    pub async fn insert_tx(
        tx: &mut Transaction<'_, Postgres>,
        rental_id: i64,
        amount: Decimal,
        payment_date: NaiveDate,
        payment_mode: &str,
    ) -> Result<i64, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO payments (rental_id, amount, payment_date, payment_mode)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(rental_id)
        .bind(amount)
        .bind(payment_date)
        .bind(payment_mode)
        .fetch_one(&mut **tx)
        .await?;

        Ok(id)
    }

    /// Releer el pago dentro de la misma transacción, para devolver al
    /// cliente exactamente lo que quedó persistido
    pub async fn find_by_id_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
    ) -> Result<Option<Payment>, AppError> {
        let payment = sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(payment)
    }
}
