//! Coordinador de la transacción de reserva
//!
//! Ejecuta una reserva de punta a punta como una única unidad atómica:
//! re-chequeo de disponibilidad con la fila del coche bloqueada, cálculo
//! del precio, alta de rental, alta de payment, cambio de estado del
//! coche y relectura del pago, todo sobre la misma transacción. Si algo
//! falla en cualquier paso no queda nada visible: ni rental sin payment,
//! ni coche marcado como Rented sin reserva.

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use crate::models::car::CarStatus;
use crate::models::payment::Payment;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::payment_repository::PaymentRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::utils::errors::AppError;

/// Resultado de una reserva confirmada
#[derive(Debug)]
pub struct BookingReceipt {
    pub rental_id: i64,
    pub payment: Payment,
}

/// Días facturables de una reserva. Cero o negativo es un rango inválido:
/// la fecha de devolución tiene que ser posterior a la de inicio.
pub fn rent_days(rental_date: NaiveDate, return_date: NaiveDate) -> Result<i64, AppError> {
    let days = (return_date - rental_date).num_days();
    if days <= 0 {
        return Err(AppError::InvalidDateRange(
            "Return date must be after rental date".to_string(),
        ));
    }
    Ok(days)
}

/// Importe total: tarifa diaria por días facturables
pub fn quote_amount(rent_per_day: Decimal, days: i64) -> Decimal {
    rent_per_day * Decimal::from(days)
}

pub struct BookingService {
    pool: PgPool,
    timeout: Duration,
}

impl BookingService {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Crear una reserva para un cliente autenticado.
    ///
    /// Si la transacción excede el timeout configurado se aborta entera
    /// (al soltar la transacción el driver hace rollback) y el caller
    /// recibe un error de persistencia; puede reintentar sin dejar rastro.
    pub async fn create_booking(
        &self,
        customer_id: i64,
        car_id: i64,
        rental_date: NaiveDate,
        return_date: NaiveDate,
        payment_mode: Option<String>,
    ) -> Result<BookingReceipt, AppError> {
        let mode = payment_mode.unwrap_or_else(|| "Cash".to_string());

        match tokio::time::timeout(
            self.timeout,
            self.run_booking(customer_id, car_id, rental_date, return_date, &mode),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(AppError::Persistence(
                "booking transaction timed out".to_string(),
            )),
        }
    }

    async fn run_booking(
        &self,
        customer_id: i64,
        car_id: i64,
        rental_date: NaiveDate,
        return_date: NaiveDate,
        payment_mode: &str,
    ) -> Result<BookingReceipt, AppError> {
        let mut tx = self.pool.begin().await?;

        // Paso 1: re-chequeo de disponibilidad con la fila bloqueada.
        // La disponibilidad que vio el cliente es de fuera de la
        // transacción; una reserva concurrente pudo ganarnos la carrera.
        let car = CarRepository::lock_by_id(&mut tx, car_id)
            .await?
            .ok_or_else(|| AppError::CarNotFound("Car not found".to_string()))?;

        if !car.bookable() {
            return Err(AppError::CarUnavailable(
                "Car not available for rental".to_string(),
            ));
        }

        // Paso 2: precio
        let days = rent_days(rental_date, return_date)?;
        let total_amount = quote_amount(car.rent_per_day, days);

        // Pasos 3-5: rental, payment y estado del coche, misma transacción
        let rental_id =
            RentalRepository::insert_tx(&mut tx, customer_id, car_id, rental_date, return_date)
                .await?;

        let today = Utc::now().date_naive();
        let payment_id =
            PaymentRepository::insert_tx(&mut tx, rental_id, total_amount, today, payment_mode)
                .await?;

        CarRepository::set_status_tx(&mut tx, car_id, CarStatus::Rented).await?;

        // Paso 6: releer el pago antes del commit para devolver
        // exactamente lo persistido
        let payment = PaymentRepository::find_by_id_tx(&mut tx, payment_id)
            .await?
            .ok_or_else(|| {
                AppError::Persistence("payment read-back failed after insert".to_string())
            })?;

        tx.commit().await?;

        info!(
            "✅ Reserva {} confirmada: coche {} para cliente {}, {} días, importe {}",
            rental_id, car_id, customer_id, days, payment.amount
        );

        Ok(BookingReceipt { rental_id, payment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_rent_days_counts_whole_days() {
        assert_eq!(rent_days(date("2024-01-01"), date("2024-01-04")).unwrap(), 3);
        assert_eq!(rent_days(date("2024-03-01"), date("2024-03-03")).unwrap(), 2);
    }

    #[test]
    fn test_same_day_rental_is_invalid() {
        let err = rent_days(date("2024-01-01"), date("2024-01-01")).unwrap_err();
        assert!(matches!(err, AppError::InvalidDateRange(_)));
    }

    #[test]
    fn test_inverted_range_is_invalid() {
        let err = rent_days(date("2024-01-04"), date("2024-01-01")).unwrap_err();
        assert!(matches!(err, AppError::InvalidDateRange(_)));
    }

    #[test]
    fn test_quote_amount() {
        // 3 días a 50/día = 150
        assert_eq!(quote_amount(dec("50"), 3), dec("150"));
        // 2 días a 100/día = 200
        assert_eq!(quote_amount(dec("100"), 2), dec("200"));
        // tarifa con decimales
        assert_eq!(quote_amount(dec("49.50"), 2), dec("99.00"));
    }
}
