//! Resolución del ciclo de vida de una reserva
//!
//! El estado temporal se deriva en `models::rental`; aquí vive el efecto
//! de cierre anticipado: cuando un empleado marca una reserva como
//! completada antes de tiempo hay que recortar la fecha de devolución y
//! liberar el coche en la misma unidad atómica. Si solo ocurriera una de
//! las dos cosas, el coche quedaría bloqueado sin motivo o se abriría la
//! puerta a una doble reserva.

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use tracing::info;

use crate::models::car::CarStatus;
use crate::models::rental::RentalStatus;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::utils::errors::AppError;

/// Resultado del cierre de una reserva
#[derive(Debug, PartialEq, Eq)]
pub struct RentalCompletion {
    pub rental_id: i64,
    pub return_date: NaiveDate,
    /// La reserva ya estaba completada; la llamada fue un no-op
    pub already_completed: bool,
}

/// Fecha de devolución tras un cierre anticipado: se recorta a hoy, nunca
/// se extiende, y nunca cae antes de `rental_date` (el schema lo prohíbe).
/// Para una reserva que aún no empezó, ambas fechas colapsan en el inicio.
pub fn completed_return_date(
    rental_date: NaiveDate,
    return_date: NaiveDate,
    today: NaiveDate,
) -> NaiveDate {
    today.max(rental_date).min(return_date)
}

pub struct RentalLifecycleService {
    pool: PgPool,
}

impl RentalLifecycleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Cerrar una reserva antes de su fecha de devolución.
    ///
    /// Idempotente: sobre una reserva ya completada devuelve éxito sin
    /// tocar nada. En caso contrario recorta `return_date` a hoy (nunca
    /// la extiende) y deja el coche en `Free`, las dos cosas o ninguna.
    pub async fn complete_early(&self, rental_id: i64) -> Result<RentalCompletion, AppError> {
        let mut tx = self.pool.begin().await?;

        let rental = RentalRepository::lock_by_id(&mut tx, rental_id)
            .await?
            .ok_or_else(|| AppError::RentalNotFound("Rental not found".to_string()))?;

        let today = Utc::now().date_naive();

        if rental.status(today) == RentalStatus::Completed {
            // No hubo escrituras; liberar la transacción sin más
            let _ = tx.rollback().await;
            return Ok(RentalCompletion {
                rental_id,
                return_date: rental.return_date,
                already_completed: true,
            });
        }

        RentalRepository::clamp_return_date_tx(&mut tx, rental_id, today).await?;
        CarRepository::set_status_tx(&mut tx, rental.car_id, CarStatus::Free).await?;

        tx.commit().await?;

        info!(
            "🔓 Reserva {} completada anticipadamente, coche {} liberado",
            rental_id, rental.car_id
        );

        Ok(RentalCompletion {
            rental_id,
            return_date: completed_return_date(rental.rental_date, rental.return_date, today),
            already_completed: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::completed_return_date;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_active_rental_clamps_to_today() {
        let result = completed_return_date(date(2025, 6, 1), date(2025, 6, 10), date(2025, 6, 5));
        assert_eq!(result, date(2025, 6, 5));
    }

    #[test]
    fn test_upcoming_rental_never_ends_before_it_starts() {
        // Cierre de una reserva que todavía no empezó: la fecha de
        // devolución colapsa en la de inicio, no en hoy
        let result = completed_return_date(date(2025, 6, 10), date(2025, 6, 15), date(2025, 6, 1));
        assert_eq!(result, date(2025, 6, 10));
        assert!(result >= date(2025, 6, 10));
    }

    #[test]
    fn test_past_rental_keeps_its_return_date() {
        let result = completed_return_date(date(2025, 5, 1), date(2025, 5, 5), date(2025, 6, 1));
        assert_eq!(result, date(2025, 5, 5));
    }

    #[test]
    fn test_completion_on_start_day() {
        let result = completed_return_date(date(2025, 6, 1), date(2025, 6, 10), date(2025, 6, 1));
        assert_eq!(result, date(2025, 6, 1));
    }
}
