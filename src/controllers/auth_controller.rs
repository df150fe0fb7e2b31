//! Controller de autenticación
//!
//! Registro y login de clientes (bcrypt + JWT) y login de empleados.

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use validator::Validate;

use crate::dto::auth_dto::{
    CustomerAuthResponse, CustomerLoginRequest, CustomerSummary, EmployeeAuthResponse,
    EmployeeLoginRequest, EmployeeSummary, RegisterCustomerRequest,
};
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::employee_repository::EmployeeRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::validate_phone;

pub struct AuthController {
    customers: CustomerRepository,
    employees: EmployeeRepository,
    jwt: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt: JwtConfig) -> Self {
        Self {
            customers: CustomerRepository::new(pool.clone()),
            employees: EmployeeRepository::new(pool),
            jwt,
        }
    }

    pub async fn register_customer(
        &self,
        request: RegisterCustomerRequest,
    ) -> Result<CustomerAuthResponse, AppError> {
        // Validar campos
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if validate_phone(&request.phone).is_err() {
            return Err(AppError::Validation(
                "Phone number must be 10 digits".to_string(),
            ));
        }

        // Verificar que el email no exista
        if self.customers.email_exists(&request.email).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let customer = self
            .customers
            .create(
                request.name,
                request.email,
                password_hash,
                request.phone,
                request.address,
            )
            .await?;

        let token = generate_token(customer.id, &customer.name, "customer", &self.jwt)?;

        Ok(CustomerAuthResponse {
            status: "success".to_string(),
            message: "Customer registered successfully".to_string(),
            token,
            customer: CustomerSummary {
                id: customer.id,
                name: customer.name,
                email: customer.email,
            },
        })
    }

    pub async fn login_customer(
        &self,
        request: CustomerLoginRequest,
    ) -> Result<CustomerAuthResponse, AppError> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let customer = self
            .customers
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        let valid = verify(&request.password, &customer.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let token = generate_token(customer.id, &customer.name, "customer", &self.jwt)?;

        Ok(CustomerAuthResponse {
            status: "success".to_string(),
            message: "Login successful".to_string(),
            token,
            customer: CustomerSummary {
                id: customer.id,
                name: customer.name,
                email: customer.email,
            },
        })
    }

    pub async fn login_employee(
        &self,
        request: EmployeeLoginRequest,
    ) -> Result<EmployeeAuthResponse, AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Employee ID and name are required".to_string(),
            ));
        }

        let employee = self
            .employees
            .find_by_id_and_name(request.employee_id, &request.name)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid employee credentials".to_string()))?;

        let token = generate_token(employee.id, &employee.name, "employee", &self.jwt)?;

        Ok(EmployeeAuthResponse {
            status: "success".to_string(),
            message: "Login successful".to_string(),
            token,
            employee: EmployeeSummary {
                id: employee.id,
                name: employee.name,
                position: employee.position,
                branch_id: employee.branch_id,
            },
        })
    }
}
