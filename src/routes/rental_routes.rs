use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};

use crate::controllers::rental_controller::RentalController;
use crate::dto::rental_dto::{
    BookingResponse, CreateRentalRequest, CustomerRentalResponse, RentalOverviewResponse,
    UpdateRentalStatusRequest,
};
use crate::dto::MessageResponse;
use crate::middleware::auth_middleware::{auth_middleware, AuthUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rental_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_rental))
        .route("/customer", get(list_customer_rentals))
        .route("/all", get(list_all_rentals))
        .route("/:id/status", put(update_rental_status))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// POST /api/rentals - el cliente autenticado reserva un coche
async fn create_rental(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateRentalRequest>,
) -> Result<(axum::http::StatusCode, Json<BookingResponse>), AppError> {
    user.require_customer()?;
    let controller = RentalController::new(state.pool.clone(), state.booking_timeout());
    let response = controller.create_rental(user.id, request).await?;
    Ok((axum::http::StatusCode::CREATED, Json(response)))
}

async fn list_customer_rentals(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<CustomerRentalResponse>>, AppError> {
    user.require_customer()?;
    let controller = RentalController::new(state.pool.clone(), state.booking_timeout());
    let response = controller.list_customer_rentals(user.id).await?;
    Ok(Json(response))
}

async fn list_all_rentals(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<RentalOverviewResponse>>, AppError> {
    user.require_employee()?;
    let controller = RentalController::new(state.pool.clone(), state.booking_timeout());
    let response = controller.list_all_rentals().await?;
    Ok(Json(response))
}

/// PUT /api/rentals/:id/status - "Completed" dispara el cierre anticipado
async fn update_rental_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateRentalStatusRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    user.require_employee()?;
    let controller = RentalController::new(state.pool.clone(), state.booking_timeout());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}
