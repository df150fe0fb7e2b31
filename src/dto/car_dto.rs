//! DTOs de inventario de coches

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::car::Car;

/// Request para dar de alta un coche
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 1, max = 50))]
    pub company: String,

    #[validate(length(min = 1, max = 20))]
    pub number_plate: String,

    pub rent_per_day: Decimal,

    /// Estado inicial; por defecto Free
    pub status: Option<String>,

    pub image_url: Option<String>,
}

/// Request para actualizar un coche existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCarRequest {
    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 1, max = 50))]
    pub company: String,

    #[validate(length(min = 1, max = 20))]
    pub number_plate: String,

    pub rent_per_day: Decimal,

    pub status: String,

    pub image_url: Option<String>,
}

/// Request para cambiar solo el estado de un coche
#[derive(Debug, Deserialize)]
pub struct UpdateCarStatusRequest {
    pub status: String,
}

/// Response de coche para la API
#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub id: i64,
    pub model: String,
    pub company: String,
    pub number_plate: String,
    pub image_url: Option<String>,
    pub rent_per_day: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            model: car.model,
            company: car.company,
            number_plate: car.number_plate,
            image_url: car.image_url,
            rent_per_day: car.rent_per_day,
            status: car.status,
            created_at: car.created_at,
        }
    }
}

/// Response de alta de coche
#[derive(Debug, Serialize)]
pub struct CreateCarResponse {
    pub status: String,
    pub message: String,
    pub car_id: i64,
}
