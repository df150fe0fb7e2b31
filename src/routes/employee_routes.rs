use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{EmployeeAuthResponse, EmployeeLoginRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

pub fn create_employee_router() -> Router<AppState> {
    Router::new().route("/login", post(login_employee))
}

async fn login_employee(
    State(state): State<AppState>,
    Json(request): Json<EmployeeLoginRequest>,
) -> Result<Json<EmployeeAuthResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), JwtConfig::from(&state.config));
    let response = controller.login_employee(request).await?;
    Ok(Json(response))
}
