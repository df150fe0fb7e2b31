//! DTOs de la API

pub mod auth_dto;
pub mod car_dto;
pub mod rental_dto;

use serde::Serialize;

/// Respuesta de confirmación simple
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}
