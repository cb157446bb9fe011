use crate::controllers::transportation_controller::TransportationController;
use crate::dto::transportation_dto::{
    CompanyQuery, LocationPairQuery, PassengersQuery, PriceRangeQuery, SaveTransportationRequest,
    SeatsQuery, TimeWindowQuery, TransportationResponse,
};
use crate::models::TransportationType;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

pub fn create_transportation_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transportation))
        .route("/", post(create_transportation))
        .route("/type/:type", get(list_by_type))
        .route("/search/price", get(search_by_price))
        .route("/search/locations", get(search_by_locations))
        .route("/search/available", get(search_available))
        .route("/search/company", get(search_by_company))
        .route("/search/seats", get(search_by_seats))
        .route("/:id", get(get_transportation))
        .route("/:id", put(update_transportation))
        .route("/:id", delete(delete_transportation))
        .route("/:id/duration", get(calculate_duration))
        .route("/:id/cost", get(calculate_cost))
}

async fn list_transportation(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransportationResponse>>, AppError> {
    let controller = TransportationController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_transportation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransportationResponse>, AppError> {
    let controller = TransportationController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn list_by_type(
    State(state): State<AppState>,
    Path(transport_type): Path<TransportationType>,
) -> Result<Json<Vec<TransportationResponse>>, AppError> {
    let controller = TransportationController::new(state.pool.clone());
    Ok(Json(controller.list_by_type(transport_type).await?))
}

async fn search_by_price(
    State(state): State<AppState>,
    Query(query): Query<PriceRangeQuery>,
) -> Result<Json<Vec<TransportationResponse>>, AppError> {
    let controller = TransportationController::new(state.pool.clone());
    Ok(Json(controller.search_by_price(query.min, query.max).await?))
}

async fn search_by_locations(
    State(state): State<AppState>,
    Query(query): Query<LocationPairQuery>,
) -> Result<Json<Vec<TransportationResponse>>, AppError> {
    let controller = TransportationController::new(state.pool.clone());
    Ok(Json(
        controller
            .search_by_locations(query.departure_id, query.arrival_id)
            .await?,
    ))
}

async fn search_available(
    State(state): State<AppState>,
    Query(query): Query<TimeWindowQuery>,
) -> Result<Json<Vec<TransportationResponse>>, AppError> {
    let controller = TransportationController::new(state.pool.clone());
    Ok(Json(
        controller
            .search_available(query.start_time, query.end_time)
            .await?,
    ))
}

async fn search_by_company(
    State(state): State<AppState>,
    Query(query): Query<CompanyQuery>,
) -> Result<Json<Vec<TransportationResponse>>, AppError> {
    let controller = TransportationController::new(state.pool.clone());
    Ok(Json(controller.search_by_company(&query.name).await?))
}

async fn search_by_seats(
    State(state): State<AppState>,
    Query(query): Query<SeatsQuery>,
) -> Result<Json<Vec<TransportationResponse>>, AppError> {
    let controller = TransportationController::new(state.pool.clone());
    Ok(Json(controller.search_by_seats(query.min_seats).await?))
}

async fn create_transportation(
    State(state): State<AppState>,
    Json(request): Json<SaveTransportationRequest>,
) -> Result<(StatusCode, Json<TransportationResponse>), AppError> {
    let controller = TransportationController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_transportation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SaveTransportationRequest>,
) -> Result<Json<TransportationResponse>, AppError> {
    let controller = TransportationController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_transportation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = TransportationController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn calculate_duration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TransportationController::new(state.pool.clone());
    let minutes = controller.calculate_duration(id).await?;
    Ok(Json(serde_json::json!({ "durationMinutes": minutes })))
}

async fn calculate_cost(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PassengersQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TransportationController::new(state.pool.clone());
    let total = controller.calculate_cost(id, query.passengers).await?;
    Ok(Json(serde_json::json!({ "totalCost": total })))
}
