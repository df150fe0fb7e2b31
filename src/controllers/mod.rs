//! Controllers de la API

pub mod auth_controller;
pub mod car_controller;
pub mod rental_controller;
