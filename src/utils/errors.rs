//! Sistema de manejo de errores
//!
//! Este módulo define la taxonomía de errores del backend de alquiler
//! y su conversión a respuestas HTTP. Los errores de almacenamiento
//! nunca llegan crudos al cliente: se traducen aquí después del rollback.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Car not found: {0}")]
    CarNotFound(String),

    #[error("Car unavailable: {0}")]
    CarUnavailable(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Rental not found: {0}")]
    RentalNotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        // Incluye pérdida de conexión, timeout del pool, violación de
        // constraint y conflictos de serialización. La transacción ya
        // quedó revertida cuando este error sube.
        match e {
            sqlx::Error::PoolTimedOut => {
                AppError::Persistence("connection pool timed out".to_string())
            }
            other => AppError::Persistence(other.to_string()),
        }
    }
}

impl AppError {
    /// Código HTTP asociado a cada variante
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::CarNotFound(_) => StatusCode::NOT_FOUND,
            AppError::CarUnavailable(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidDateRange(_) => StatusCode::BAD_REQUEST,
            AppError::RentalNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Mensaje visible para el cliente
    fn client_message(&self) -> String {
        match self {
            AppError::CarNotFound(msg)
            | AppError::CarUnavailable(msg)
            | AppError::InvalidDateRange(msg)
            | AppError::RentalNotFound(msg)
            | AppError::Validation(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::Conflict(msg)
            | AppError::Jwt(msg) => msg.clone(),
            // Los detalles de almacenamiento quedan en los logs
            AppError::Persistence(_) => {
                "An unexpected error occurred. Please try again.".to_string()
            }
            AppError::Internal(_) => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("❌ {}", self);
        } else {
            tracing::warn!("⚠️  {}", self);
        }

        let body = Json(json!({
            "status": "error",
            "message": self.client_message(),
        }));

        (status, body).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_errors_map_to_expected_status_codes() {
        assert_eq!(
            AppError::CarUnavailable("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidDateRange("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::RentalNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::CarNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Persistence("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_persistence_details_are_not_leaked() {
        let err = AppError::Persistence("connection reset by peer".into());
        assert!(!err.client_message().contains("connection reset"));
    }

    #[test]
    fn test_pool_timeout_becomes_persistence_error() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::Persistence(_)));
    }
}
