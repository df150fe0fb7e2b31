//! Backend de alquiler de coches
//!
//! API REST con axum + sqlx sobre PostgreSQL. El núcleo es la transacción
//! atómica de reserva (`services::booking_service`) y el cierre anticipado
//! idempotente (`services::rental_lifecycle`).

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
