use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::controllers::rental_controller::RentalController;
use crate::dto::auth_dto::{CustomerAuthResponse, CustomerLoginRequest, RegisterCustomerRequest};
use crate::dto::rental_dto::CustomerRentalResponse;
use crate::middleware::auth_middleware::{auth_middleware, AuthUser};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

pub fn create_customer_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/register", post(register_customer))
        .route("/login", post(login_customer));

    let protected = Router::new()
        .route("/bookings", get(list_bookings))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

async fn register_customer(
    State(state): State<AppState>,
    Json(request): Json<RegisterCustomerRequest>,
) -> Result<(axum::http::StatusCode, Json<CustomerAuthResponse>), AppError> {
    let controller = AuthController::new(state.pool.clone(), JwtConfig::from(&state.config));
    let response = controller.register_customer(request).await?;
    Ok((axum::http::StatusCode::CREATED, Json(response)))
}

async fn login_customer(
    State(state): State<AppState>,
    Json(request): Json<CustomerLoginRequest>,
) -> Result<Json<CustomerAuthResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), JwtConfig::from(&state.config));
    let response = controller.login_customer(request).await?;
    Ok(Json(response))
}

async fn list_bookings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<CustomerRentalResponse>>, AppError> {
    user.require_customer()?;
    let controller = RentalController::new(state.pool.clone(), state.booking_timeout());
    let response = controller.list_customer_rentals(user.id).await?;
    Ok(Json(response))
}
