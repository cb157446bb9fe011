use crate::controllers::location_controller::LocationController;
use crate::dto::location_dto::{LocationResponse, SaveLocationRequest, SearchLocationRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

pub fn create_location_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_locations))
        .route("/", post(create_location))
        .route("/search", get(search_locations))
        .route("/:id", get(get_location))
        .route("/:id", put(update_location))
        .route("/:id", delete(delete_location))
}

async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationResponse>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LocationResponse>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn search_locations(
    State(state): State<AppState>,
    Query(request): Query<SearchLocationRequest>,
) -> Result<Json<Vec<LocationResponse>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    Ok(Json(controller.search(request).await?))
}

async fn create_location(
    State(state): State<AppState>,
    Json(request): Json<SaveLocationRequest>,
) -> Result<(StatusCode, Json<LocationResponse>), AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SaveLocationRequest>,
) -> Result<Json<LocationResponse>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Location deleted successfully"
    })))
}
