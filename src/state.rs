//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todo el estado durable vive en la base;
//! aquí solo van el pool y la configuración.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }

    /// Timeout de la transacción de reserva
    pub fn booking_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.config.booking_timeout_secs)
    }
}
