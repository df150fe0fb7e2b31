//! Modelo de Car
//!
//! Este módulo contiene el struct Car y el enum canónico de estado del
//! inventario. La base guarda el estado como texto; los valores legacy
//! `Available` y `Maintenance` se aceptan al leer como alias de `Free`
//! y `Service` y nunca se escriben de vuelta.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado canónico de un coche en el inventario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarStatus {
    #[serde(alias = "Available")]
    Free,
    Rented,
    #[serde(alias = "Maintenance")]
    Service,
}

impl CarStatus {
    /// Interpretar el valor almacenado, aceptando los alias legacy
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Free" | "Available" => Some(CarStatus::Free),
            "Rented" => Some(CarStatus::Rented),
            "Service" | "Maintenance" => Some(CarStatus::Service),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CarStatus::Free => "Free",
            CarStatus::Rented => "Rented",
            CarStatus::Service => "Service",
        }
    }

    /// Solo un coche libre puede reservarse
    pub fn is_bookable(&self) -> bool {
        matches!(self, CarStatus::Free)
    }
}

/// Car principal - mapea a la tabla cars
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i64,
    pub model: String,
    pub company: String,
    pub number_plate: String,
    pub image_url: Option<String>,
    pub rent_per_day: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Car {
    /// Estado canónico del coche; un valor desconocido en la base
    /// se trata como no reservable
    pub fn bookable(&self) -> bool {
        CarStatus::parse(&self.status)
            .map(|s| s.is_bookable())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_accepts_legacy_aliases() {
        assert_eq!(CarStatus::parse("Free"), Some(CarStatus::Free));
        assert_eq!(CarStatus::parse("Available"), Some(CarStatus::Free));
        assert_eq!(CarStatus::parse("Service"), Some(CarStatus::Service));
        assert_eq!(CarStatus::parse("Maintenance"), Some(CarStatus::Service));
        assert_eq!(CarStatus::parse("Rented"), Some(CarStatus::Rented));
        assert_eq!(CarStatus::parse("Broken"), None);
    }

    #[test]
    fn test_only_free_is_bookable() {
        assert!(CarStatus::Free.is_bookable());
        assert!(!CarStatus::Rented.is_bookable());
        assert!(!CarStatus::Service.is_bookable());
    }

    #[test]
    fn test_canonical_spelling_is_written_back() {
        let status = CarStatus::parse("Available").unwrap();
        assert_eq!(status.as_str(), "Free");
        let status = CarStatus::parse("Maintenance").unwrap();
        assert_eq!(status.as_str(), "Service");
    }
}
