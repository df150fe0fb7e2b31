//! Modelo de Employee
//!
//! Solo se usa para el login de empleados; el CRUD de empleados y
//! sucursales queda fuera de este servicio.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub branch_id: Option<i64>,
}
