//! Modelos de dominio

pub mod car;
pub mod customer;
pub mod employee;
pub mod payment;
pub mod rental;
