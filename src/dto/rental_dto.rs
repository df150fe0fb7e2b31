//! DTOs de reservas y pagos

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::payment::Payment;

/// Request para crear una reserva; el cliente sale del token
#[derive(Debug, Deserialize)]
pub struct CreateRentalRequest {
    pub car_id: i64,
    pub rental_date: NaiveDate,
    pub return_date: NaiveDate,
    /// Por defecto "Cash"
    pub payment_mode: Option<String>,
}

/// Request para cambiar el estado de una reserva
#[derive(Debug, Deserialize)]
pub struct UpdateRentalStatusRequest {
    pub status: String,
}

/// Pago tal como se devuelve al cliente
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub payment_id: i64,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_mode: String,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            payment_id: payment.id,
            amount: payment.amount,
            payment_date: payment.payment_date,
            payment_mode: payment.payment_mode,
        }
    }
}

/// Response de reserva creada
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub status: String,
    pub rental_id: i64,
    pub payment: PaymentResponse,
}

/// Reserva en el listado del cliente, con estado derivado
#[derive(Debug, Serialize)]
pub struct CustomerRentalResponse {
    pub rental_id: i64,
    pub car_id: i64,
    pub car_model: String,
    pub company: String,
    pub rental_date: NaiveDate,
    pub return_date: NaiveDate,
    pub status: String,
}

/// Reserva en el listado de empleados, con datos del cliente
#[derive(Debug, Serialize)]
pub struct RentalOverviewResponse {
    pub rental_id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub car_id: i64,
    pub car_model: String,
    pub company: String,
    pub rental_date: NaiveDate,
    pub return_date: NaiveDate,
    pub status: String,
}
