//! Controller de inventario de coches

use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::car_dto::{
    CarResponse, CreateCarRequest, CreateCarResponse, UpdateCarRequest, UpdateCarStatusRequest,
};
use crate::dto::MessageResponse;
use crate::models::car::CarStatus;
use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_number_plate;

pub struct CarController {
    repository: CarRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool),
        }
    }

    /// Catálogo reservable para clientes
    pub async fn list_available(&self) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.repository.list_bookable().await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    /// Inventario completo con estados, para empleados
    pub async fn list_all(&self) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.repository.list_all().await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn create(&self, request: CreateCarRequest) -> Result<CreateCarResponse, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if validate_number_plate(&request.number_plate).is_err() {
            return Err(AppError::Validation(
                "Number plate should only contain letters and numbers".to_string(),
            ));
        }

        if request.rent_per_day <= Decimal::ZERO {
            return Err(AppError::Validation(
                "Rent per day must be positive".to_string(),
            ));
        }

        // Estado inicial desde el set canónico
        let status = match request.status.as_deref() {
            None => CarStatus::Free,
            Some(value) => CarStatus::parse(value).ok_or_else(|| {
                AppError::Validation(
                    "Invalid status value. Must be one of: Free, Rented, or Service".to_string(),
                )
            })?,
        };

        let number_plate = request.number_plate.to_uppercase();

        if self.repository.number_plate_exists(&number_plate, None).await? {
            return Err(AppError::Conflict(
                "A car with this number plate already exists".to_string(),
            ));
        }

        let car = self
            .repository
            .create(
                request.model,
                request.company,
                number_plate,
                request.image_url,
                request.rent_per_day,
                status,
            )
            .await?;

        Ok(CreateCarResponse {
            status: "success".to_string(),
            message: "Car added successfully".to_string(),
            car_id: car.id,
        })
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateCarRequest,
    ) -> Result<MessageResponse, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let status = CarStatus::parse(&request.status).ok_or_else(|| {
            AppError::Validation(
                "Invalid status value. Must be one of: Free, Rented, or Service".to_string(),
            )
        })?;

        let number_plate = request.number_plate.to_uppercase();

        if self
            .repository
            .number_plate_exists(&number_plate, Some(id))
            .await?
        {
            return Err(AppError::Conflict(
                "A car with this number plate already exists".to_string(),
            ));
        }

        self.repository
            .update(
                id,
                request.model,
                request.company,
                number_plate,
                request.image_url,
                request.rent_per_day,
                status,
            )
            .await?;

        Ok(MessageResponse::success("Car updated successfully"))
    }

    pub async fn update_status(
        &self,
        id: i64,
        request: UpdateCarStatusRequest,
    ) -> Result<MessageResponse, AppError> {
        let status = CarStatus::parse(&request.status).ok_or_else(|| {
            AppError::Validation(
                "Invalid status value. Must be one of: Free, Rented, or Service".to_string(),
            )
        })?;

        self.repository.update_status(id, status).await?;

        Ok(MessageResponse::success("Car status updated successfully"))
    }

    pub async fn delete(&self, id: i64) -> Result<MessageResponse, AppError> {
        // Un coche con reserva vigente no se puede borrar
        if self.repository.has_current_rental(id).await? {
            return Err(AppError::Validation(
                "Cannot delete car while it is being rented".to_string(),
            ));
        }

        self.repository.delete(id).await?;

        Ok(MessageResponse::success("Car deleted successfully"))
    }
}
