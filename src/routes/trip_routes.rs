use crate::controllers::trip_controller::TripController;
use crate::dto::trip_dto::{SaveTripRequest, TripResponse, UpdateTripStatusRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips))
        .route("/", post(create_trip))
        .route("/:id", get(get_trip))
        .route("/:id", put(update_trip))
        .route("/:id", delete(delete_trip))
        .route("/:id/cost", get(calculate_trip_cost))
        .route("/:id/duration", get(calculate_trip_duration))
        .route("/:id/status", put(update_trip_status))
}

async fn list_trips(State(state): State<AppState>) -> Result<Json<Vec<TripResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TripResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<SaveTripRequest>,
) -> Result<(StatusCode, Json<TripResponse>), AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SaveTripRequest>,
) -> Result<Json<TripResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Trip deleted successfully"
    })))
}

async fn calculate_trip_cost(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Decimal>, AppError> {
    let controller = TripController::new(state.pool.clone());
    Ok(Json(controller.calculate_cost(id).await?))
}

async fn calculate_trip_duration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<i64>, AppError> {
    let controller = TripController::new(state.pool.clone());
    Ok(Json(controller.calculate_duration(id).await?))
}

async fn update_trip_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTripStatusRequest>,
) -> Result<Json<TripResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    Ok(Json(controller.update_status(id, request).await?))
}
