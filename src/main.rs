use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use car_rental_backend::config::environment::EnvironmentConfig;
use car_rental_backend::database::{ensure_schema, DatabaseConnection};
use car_rental_backend::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use car_rental_backend::routes;
use car_rental_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Car Rental Backend - API de reservas");
    info!("=======================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Crear tablas si no existen y sembrar el catálogo
    if let Err(e) = ensure_schema(&pool).await {
        error!("❌ Error preparando el schema: {}", e);
        return Err(anyhow::anyhow!("Error de schema: {}", e));
    }
    info!("✅ Schema listo");

    // Crear router de la API
    let environment = EnvironmentConfig::default();

    // En producción solo se aceptan los orígenes configurados
    let cors = if environment.is_production() && !environment.cors_origins.is_empty() {
        cors_middleware_with_origins(environment.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let addr: SocketAddr = environment.server_url().parse()?;
    let app_state = AppState::new(pool, environment);

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest(
            "/api/customers",
            routes::customer_routes::create_customer_router(app_state.clone()),
        )
        .nest(
            "/api/employees",
            routes::employee_routes::create_employee_router(),
        )
        .nest(
            "/api/cars",
            routes::car_routes::create_car_router(app_state.clone()),
        )
        .nest(
            "/api/rentals",
            routes::rental_routes::create_rental_router(app_state.clone()),
        )
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("👤 Clientes:");
    info!("   POST /api/customers/register - Registrar cliente");
    info!("   POST /api/customers/login - Login cliente");
    info!("   GET  /api/customers/bookings - Reservas del cliente");
    info!("🧑‍💼 Empleados:");
    info!("   POST /api/employees/login - Login empleado");
    info!("🚙 Inventario:");
    info!("   GET  /api/cars - Coches disponibles");
    info!("   GET  /api/cars/available - Coches disponibles");
    info!("   GET  /api/cars/status - Inventario completo con estados");
    info!("   POST /api/cars - Alta de coche");
    info!("   PUT  /api/cars/:id - Actualizar coche");
    info!("   PUT  /api/cars/:id/status - Cambiar estado de coche");
    info!("   DELETE /api/cars/:id - Eliminar coche");
    info!("📋 Reservas:");
    info!("   POST /api/rentals - Crear reserva (transacción atómica)");
    info!("   GET  /api/rentals/customer - Reservas del cliente");
    info!("   GET  /api/rentals/all - Todas las reservas");
    info!("   PUT  /api/rentals/:id/status - Completar reserva anticipadamente");

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Car rental API funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
