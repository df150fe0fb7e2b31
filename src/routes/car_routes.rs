use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};

use crate::controllers::car_controller::CarController;
use crate::dto::car_dto::{
    CarResponse, CreateCarRequest, CreateCarResponse, UpdateCarRequest, UpdateCarStatusRequest,
};
use crate::dto::MessageResponse;
use crate::middleware::auth_middleware::{auth_middleware, AuthUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router(state: AppState) -> Router<AppState> {
    // El catálogo reservable es público; la gestión de inventario
    // requiere token de empleado. "/" y "/available" son la misma vista.
    let public = Router::new()
        .route("/", get(list_available_cars))
        .route("/available", get(list_available_cars));

    let protected = Router::new()
        .route("/status", get(list_car_status))
        .route("/", post(create_car))
        .route("/:id", put(update_car))
        .route("/:id", delete(delete_car))
        .route("/:id/status", put(update_car_status))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

async fn list_available_cars(
    State(state): State<AppState>,
) -> Result<Json<Vec<CarResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.list_available().await?;
    Ok(Json(response))
}

async fn list_car_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<CarResponse>>, AppError> {
    user.require_employee()?;
    let controller = CarController::new(state.pool.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}

async fn create_car(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateCarRequest>,
) -> Result<(axum::http::StatusCode, Json<CreateCarResponse>), AppError> {
    user.require_employee()?;
    let controller = CarController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((axum::http::StatusCode::CREATED, Json(response)))
}

async fn update_car(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateCarRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    user.require_employee()?;
    let controller = CarController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn update_car_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateCarStatusRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    user.require_employee()?;
    let controller = CarController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}

async fn delete_car(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    user.require_employee()?;
    let controller = CarController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
