//! Middleware de la aplicación

pub mod auth_middleware;
pub mod cors;
