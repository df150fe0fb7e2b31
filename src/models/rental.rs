//! Modelo de Rental
//!
//! El estado temporal de una reserva (Upcoming/Active/Completed) no se
//! almacena: es una función pura de las fechas contra el día actual y se
//! deriva siempre en un único sitio, aquí.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado temporal derivado de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentalStatus {
    Upcoming,
    Active,
    Completed,
}

impl RentalStatus {
    /// Derivar el estado de una reserva a partir de sus fechas.
    ///
    /// `Upcoming` si hoy < inicio, `Active` si inicio ≤ hoy ≤ fin,
    /// `Completed` si hoy > fin.
    pub fn derive(rental_date: NaiveDate, return_date: NaiveDate, today: NaiveDate) -> Self {
        if today < rental_date {
            RentalStatus::Upcoming
        } else if today > return_date {
            RentalStatus::Completed
        } else {
            RentalStatus::Active
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Upcoming => "Upcoming",
            RentalStatus::Active => "Active",
            RentalStatus::Completed => "Completed",
        }
    }
}

/// Rental principal - mapea a la tabla rentals
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rental {
    pub id: i64,
    pub customer_id: i64,
    pub car_id: i64,
    pub rental_date: NaiveDate,
    pub return_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Rental {
    pub fn status(&self, today: NaiveDate) -> RentalStatus {
        RentalStatus::derive(self.rental_date, self.return_date, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_status_before_start_is_upcoming() {
        let status = RentalStatus::derive(date("2024-03-10"), date("2024-03-15"), date("2024-03-01"));
        assert_eq!(status, RentalStatus::Upcoming);
    }

    #[test]
    fn test_status_within_range_is_active() {
        let status = RentalStatus::derive(date("2024-03-10"), date("2024-03-15"), date("2024-03-12"));
        assert_eq!(status, RentalStatus::Active);
    }

    #[test]
    fn test_status_on_boundary_days_is_active() {
        assert_eq!(
            RentalStatus::derive(date("2024-03-10"), date("2024-03-15"), date("2024-03-10")),
            RentalStatus::Active
        );
        assert_eq!(
            RentalStatus::derive(date("2024-03-10"), date("2024-03-15"), date("2024-03-15")),
            RentalStatus::Active
        );
    }

    #[test]
    fn test_status_after_end_is_completed() {
        let status = RentalStatus::derive(date("2024-03-10"), date("2024-03-15"), date("2024-03-16"));
        assert_eq!(status, RentalStatus::Completed);
    }
}
