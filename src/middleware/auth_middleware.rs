//! Middleware de autenticación
//!
//! Extrae el token Bearer, lo verifica y deja el usuario autenticado en
//! las extensiones del request para que los handlers lo consuman.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{verify_token, JwtConfig};

/// Rol del usuario autenticado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Customer,
    Employee,
}

/// Usuario autenticado, disponible como extensión del request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
    pub role: UserRole,
}

impl AuthUser {
    pub fn require_customer(&self) -> Result<(), AppError> {
        if self.role != UserRole::Customer {
            return Err(AppError::Forbidden("Customer access required".to_string()));
        }
        Ok(())
    }

    pub fn require_employee(&self) -> Result<(), AppError> {
        if self.role != UserRole::Employee {
            return Err(AppError::Forbidden("Employee access required".to_string()));
        }
        Ok(())
    }
}

/// Middleware de autenticación por token Bearer
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header".to_string()))?;

    let claims = verify_token(token, &JwtConfig::from(&state.config))?;

    let id: i64 = claims
        .sub
        .parse()
        .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

    let role = match claims.role.as_str() {
        "customer" => UserRole::Customer,
        "employee" => UserRole::Employee,
        _ => return Err(AppError::Unauthorized("Invalid token role".to_string())),
    };

    request.extensions_mut().insert(AuthUser {
        id,
        name: claims.name,
        role,
    });

    Ok(next.run(request).await)
}
