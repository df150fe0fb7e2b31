//! Repositorios de acceso a datos

pub mod car_repository;
pub mod customer_repository;
pub mod employee_repository;
pub mod payment_repository;
pub mod rental_repository;
