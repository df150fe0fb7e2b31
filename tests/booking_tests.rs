//! Tests de integración contra PostgreSQL real.
//!
//! Requieren `DATABASE_URL` apuntando a una base de pruebas y se ejecutan
//! explícitamente con `cargo test -- --ignored`. Cada test crea su propio
//! coche y cliente con identificadores únicos, así que pueden correr sobre
//! una base compartida sin pisarse.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

use car_rental_backend::config::database::DatabaseConfig;
use car_rental_backend::database::ensure_schema;
use car_rental_backend::services::booking_service::BookingService;
use car_rental_backend::services::rental_lifecycle::RentalLifecycleService;
use car_rental_backend::utils::errors::AppError;

async fn test_pool() -> PgPool {
    let pool = DatabaseConfig::default()
        .create_test_pool()
        .await
        .expect("no se pudo conectar a la base de pruebas");
    ensure_schema(&pool).await.expect("schema de pruebas");
    pool
}

/// Sufijo único por test para matrículas y emails
fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

async fn insert_car(pool: &PgPool, rate: &str) -> i64 {
    let plate = format!("TST{}", unique_suffix() % 1_000_000_000);
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO cars (model, company, number_plate, rent_per_day, status)
         VALUES ('Test', 'Test', $1, $2, 'Free') RETURNING id",
    )
    .bind(plate)
    .bind(rate.parse::<Decimal>().unwrap())
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

async fn insert_customer(pool: &PgPool) -> i64 {
    let email = format!("test{}@example.com", unique_suffix());
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO customers (name, email, password_hash, phone, address)
         VALUES ('Test', $1, 'x', '9876543210', 'x') RETURNING id",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

async fn car_status(pool: &PgPool, car_id: i64) -> String {
    let (status,): (String,) = sqlx::query_as("SELECT status FROM cars WHERE id = $1")
        .bind(car_id)
        .fetch_one(pool)
        .await
        .unwrap();
    status
}

async fn rental_count(pool: &PgPool, car_id: i64) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM rentals WHERE car_id = $1")
        .bind(car_id)
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

#[tokio::test]
#[ignore]
async fn test_concurrent_bookings_only_one_wins() {
    let pool = test_pool().await;
    let car_id = insert_car(&pool, "50.00").await;
    let customer_a = insert_customer(&pool).await;
    let customer_b = insert_customer(&pool).await;

    let service = BookingService::new(pool.clone(), Duration::from_secs(10));
    let today = Utc::now().date_naive();
    let rental_date = today + chrono::Days::new(1);
    let return_date = today + chrono::Days::new(4);

    // Dos reservas simultáneas sobre el mismo coche: el lock de la fila
    // serializa, y el perdedor tiene que ver el estado ya confirmado
    let (first, second) = tokio::join!(
        service.create_booking(customer_a, car_id, rental_date, return_date, None),
        service.create_booking(customer_b, car_id, rental_date, return_date, None),
    );

    let (winner, loser) = match (&first, &second) {
        (Ok(_), Err(_)) => (first.as_ref().unwrap(), second.as_ref().unwrap_err()),
        (Err(_), Ok(_)) => (second.as_ref().unwrap(), first.as_ref().unwrap_err()),
        other => panic!("se esperaba exactamente una reserva ganadora: {:?}", other),
    };

    assert!(matches!(loser, AppError::CarUnavailable(_)));
    assert_eq!(winner.payment.amount, "150.00".parse::<Decimal>().unwrap());
    assert_eq!(car_status(&pool, car_id).await, "Rented");
    assert_eq!(rental_count(&pool, car_id).await, 1);

    let (payments,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM payments p JOIN rentals r ON p.rental_id = r.id WHERE r.car_id = $1",
    )
    .bind(car_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(payments, 1);
}

#[tokio::test]
#[ignore]
async fn test_invalid_date_range_leaves_no_trace() {
    let pool = test_pool().await;
    let car_id = insert_car(&pool, "50.00").await;
    let customer_id = insert_customer(&pool).await;

    let service = BookingService::new(pool.clone(), Duration::from_secs(10));
    let today = Utc::now().date_naive();

    let err = service
        .create_booking(
            customer_id,
            car_id,
            today + chrono::Days::new(4),
            today + chrono::Days::new(1),
            None,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidDateRange(_)));
    // La transacción abortada no deja rental ni cambia el estado del coche
    assert_eq!(rental_count(&pool, car_id).await, 0);
    assert_eq!(car_status(&pool, car_id).await, "Free");
}

#[tokio::test]
#[ignore]
async fn test_complete_early_frees_car_and_is_idempotent() {
    let pool = test_pool().await;
    let car_id = insert_car(&pool, "50.00").await;
    let customer_id = insert_customer(&pool).await;

    let service = BookingService::new(pool.clone(), Duration::from_secs(10));
    let today = Utc::now().date_naive();
    let receipt = service
        .create_booking(
            customer_id,
            car_id,
            today,
            today + chrono::Days::new(5),
            None,
        )
        .await
        .unwrap();
    assert_eq!(car_status(&pool, car_id).await, "Rented");

    let lifecycle = RentalLifecycleService::new(pool.clone());

    let first = lifecycle.complete_early(receipt.rental_id).await.unwrap();
    assert_eq!(first.return_date, today);
    assert_eq!(car_status(&pool, car_id).await, "Free");

    // Repetir el cierre no cambia nada ni falla
    let second = lifecycle.complete_early(receipt.rental_id).await.unwrap();
    assert_eq!(second.return_date, today);
    assert_eq!(car_status(&pool, car_id).await, "Free");

    let (return_date,): (chrono::NaiveDate,) =
        sqlx::query_as("SELECT return_date FROM rentals WHERE id = $1")
            .bind(receipt.rental_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(return_date, today);
}

#[tokio::test]
#[ignore]
async fn test_complete_early_before_rental_starts() {
    let pool = test_pool().await;
    let car_id = insert_car(&pool, "50.00").await;
    let customer_id = insert_customer(&pool).await;

    let service = BookingService::new(pool.clone(), Duration::from_secs(10));
    let today = Utc::now().date_naive();
    let rental_date = today + chrono::Days::new(5);
    let receipt = service
        .create_booking(
            customer_id,
            car_id,
            rental_date,
            today + chrono::Days::new(10),
            None,
        )
        .await
        .unwrap();

    // Cancelar antes del inicio: la fecha de devolución colapsa en la de
    // inicio (el schema exige return_date >= rental_date) y el coche se libera
    let lifecycle = RentalLifecycleService::new(pool.clone());
    let completion = lifecycle.complete_early(receipt.rental_id).await.unwrap();

    assert_eq!(completion.return_date, rental_date);
    assert_eq!(car_status(&pool, car_id).await, "Free");

    let (return_date,): (chrono::NaiveDate,) =
        sqlx::query_as("SELECT return_date FROM rentals WHERE id = $1")
            .bind(receipt.rental_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(return_date, rental_date);
}
