mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("✈️ Travel Advisor API");
    info!("=====================");

    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Database connection failed: {}", e);
            return Err(anyhow::anyhow!("Database error: {}", e));
        }
    };

    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Migration failed: {}", e);
        return Err(e);
    }
    info!("✅ Database ready, migrations applied");

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::default();

    let cors = if config.is_development() || config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/locations", routes::location_routes::create_location_router())
        .nest("/api/trips", routes::trip_routes::create_trip_router())
        .nest(
            "/api/transportation",
            routes::transportation_routes::create_transportation_router(),
        )
        .nest(
            "/api/route-optimizations",
            routes::route_optimization_routes::create_route_optimization_router(),
        )
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Server starting at http://{}", addr);
    info!("🔍 Available endpoints:");
    info!("   GET  /health - Health check");
    info!("📍 Locations:");
    info!("   GET|POST /api/locations, GET /api/locations/search, GET|PUT|DELETE /api/locations/:id");
    info!("🧳 Trips:");
    info!("   GET|POST /api/trips, GET|PUT|DELETE /api/trips/:id");
    info!("   GET /api/trips/:id/cost, GET /api/trips/:id/duration, PUT /api/trips/:id/status");
    info!("🚆 Transportation:");
    info!("   GET|POST /api/transportation, GET|PUT|DELETE /api/transportation/:id");
    info!("   GET /api/transportation/type/:type, /search/price, /search/locations, /search/available, /search/company, /search/seats");
    info!("   GET /api/transportation/:id/duration, GET /api/transportation/:id/cost");
    info!("🗺️ Route optimizations:");
    info!("   GET|POST /api/route-optimizations, GET|PUT|DELETE /api/route-optimizations/:id");
    info!("   GET /api/route-optimizations/trip/:tripId, /type/:type, /criteria/:criteria");
    info!("   POST /api/route-optimizations/:id/reoptimize, GET /api/route-optimizations/compare");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Server error: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Server stopped");
    Ok(())
}

/// Simple liveness endpoint
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Graceful shutdown on Ctrl+C or SIGTERM
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
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
