//! Controller de reservas
//!
//! Orquesta entre los DTOs de la API y el núcleo transaccional
//! (`BookingService` y `RentalLifecycleService`).

use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;

use crate::dto::rental_dto::{
    BookingResponse, CreateRentalRequest, CustomerRentalResponse, PaymentResponse,
    RentalOverviewResponse, UpdateRentalStatusRequest,
};
use crate::dto::MessageResponse;
use crate::models::rental::RentalStatus;
use crate::repositories::rental_repository::RentalRepository;
use crate::services::booking_service::BookingService;
use crate::services::rental_lifecycle::RentalLifecycleService;
use crate::utils::errors::AppError;

pub struct RentalController {
    repository: RentalRepository,
    booking: BookingService,
    lifecycle: RentalLifecycleService,
}

impl RentalController {
    pub fn new(pool: PgPool, booking_timeout: Duration) -> Self {
        Self {
            repository: RentalRepository::new(pool.clone()),
            booking: BookingService::new(pool.clone(), booking_timeout),
            lifecycle: RentalLifecycleService::new(pool),
        }
    }

    pub async fn create_rental(
        &self,
        customer_id: i64,
        request: CreateRentalRequest,
    ) -> Result<BookingResponse, AppError> {
        let receipt = self
            .booking
            .create_booking(
                customer_id,
                request.car_id,
                request.rental_date,
                request.return_date,
                request.payment_mode,
            )
            .await?;

        Ok(BookingResponse {
            status: "success".to_string(),
            rental_id: receipt.rental_id,
            payment: PaymentResponse::from(receipt.payment),
        })
    }

    /// Reservas del cliente autenticado, con su estado derivado
    pub async fn list_customer_rentals(
        &self,
        customer_id: i64,
    ) -> Result<Vec<CustomerRentalResponse>, AppError> {
        let today = Utc::now().date_naive();
        let rows = self.repository.list_by_customer(customer_id).await?;

        Ok(rows
            .into_iter()
            .map(|r| CustomerRentalResponse {
                rental_id: r.id,
                car_id: r.car_id,
                car_model: r.car_model,
                company: r.company,
                rental_date: r.rental_date,
                return_date: r.return_date,
                status: RentalStatus::derive(r.rental_date, r.return_date, today)
                    .as_str()
                    .to_string(),
            })
            .collect())
    }

    /// Todas las reservas, para empleados
    pub async fn list_all_rentals(&self) -> Result<Vec<RentalOverviewResponse>, AppError> {
        let today = Utc::now().date_naive();
        let rows = self.repository.list_all().await?;

        Ok(rows
            .into_iter()
            .map(|r| RentalOverviewResponse {
                rental_id: r.id,
                customer_id: r.customer_id,
                customer_name: r.customer_name,
                car_id: r.car_id,
                car_model: r.car_model,
                company: r.company,
                rental_date: r.rental_date,
                return_date: r.return_date,
                status: RentalStatus::derive(r.rental_date, r.return_date, today)
                    .as_str()
                    .to_string(),
            })
            .collect())
    }

    /// Cambio de estado de una reserva. Solo la transición a Completed
    /// tiene efecto: dispara el cierre anticipado atómico.
    pub async fn update_status(
        &self,
        rental_id: i64,
        request: UpdateRentalStatusRequest,
    ) -> Result<MessageResponse, AppError> {
        if request.status != "Completed" {
            return Err(AppError::Validation(
                "Unsupported rental status; only 'Completed' can be set".to_string(),
            ));
        }

        let completion = self.lifecycle.complete_early(rental_id).await?;
        if completion.already_completed {
            tracing::debug!(
                "Reserva {} ya estaba completada (fecha {})",
                completion.rental_id,
                completion.return_date
            );
        }

        Ok(MessageResponse::success(
            "Rental status updated successfully",
        ))
    }
}
