//! Modelo de Payment
//!
//! Un pago se crea exactamente una vez, en la misma transacción que su
//! reserva (relación 1:1), y no se muta después.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: i64,
    pub rental_id: i64,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_mode: String,
}
