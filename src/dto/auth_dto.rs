//! DTOs de autenticación

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para registrar un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterCustomerRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6))]
    pub password: String,

    pub phone: String,

    #[validate(length(min = 1, max = 100))]
    pub address: String,
}

/// Request de login de cliente
#[derive(Debug, Deserialize)]
pub struct CustomerLoginRequest {
    pub email: String,
    pub password: String,
}

/// Request de login de empleado
#[derive(Debug, Deserialize)]
pub struct EmployeeLoginRequest {
    pub employee_id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CustomerSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CustomerAuthResponse {
    pub status: String,
    pub message: String,
    pub token: String,
    pub customer: CustomerSummary,
}

#[derive(Debug, Serialize)]
pub struct EmployeeSummary {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub branch_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct EmployeeAuthResponse {
    pub status: String,
    pub message: String,
    pub token: String,
    pub employee: EmployeeSummary,
}
