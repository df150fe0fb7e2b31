//! Servicios de negocio
//!
//! Aquí vive el núcleo del sistema: el coordinador transaccional de
//! reservas y la resolución del ciclo de vida de una reserva.

pub mod booking_service;
pub mod rental_lifecycle;
