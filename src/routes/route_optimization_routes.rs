use crate::controllers::route_optimization_controller::RouteOptimizationController;
use crate::dto::route_optimization_dto::{
    CompareParams, CreateRouteOptimizationRequest, ReoptimizeParams, RouteOptimizationResponse,
    UpdateRouteOptimizationRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

pub fn create_route_optimization_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_route_optimizations))
        .route("/", post(create_route_optimization))
        .route("/compare", get(compare_strategies))
        .route("/trip/:trip_id", get(get_by_trip))
        .route("/type/:optimization_type", get(list_by_type))
        .route("/criteria/:criteria", get(list_by_criteria))
        .route("/:id", get(get_route_optimization))
        .route("/:id", put(update_route_optimization))
        .route("/:id", delete(delete_route_optimization))
        .route("/:id/reoptimize", post(reoptimize_route))
}

async fn list_route_optimizations(
    State(state): State<AppState>,
) -> Result<Json<Vec<RouteOptimizationResponse>>, AppError> {
    let controller = RouteOptimizationController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_route_optimization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RouteOptimizationResponse>, AppError> {
    let controller = RouteOptimizationController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn get_by_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<RouteOptimizationResponse>, AppError> {
    let controller = RouteOptimizationController::new(state.pool.clone());
    Ok(Json(controller.get_by_trip_id(trip_id).await?))
}

async fn list_by_type(
    State(state): State<AppState>,
    Path(optimization_type): Path<String>,
) -> Result<Json<Vec<RouteOptimizationResponse>>, AppError> {
    let controller = RouteOptimizationController::new(state.pool.clone());
    Ok(Json(controller.list_by_type(&optimization_type).await?))
}

async fn list_by_criteria(
    State(state): State<AppState>,
    Path(criteria): Path<String>,
) -> Result<Json<Vec<RouteOptimizationResponse>>, AppError> {
    let controller = RouteOptimizationController::new(state.pool.clone());
    Ok(Json(controller.list_by_criteria(&criteria).await?))
}

async fn create_route_optimization(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteOptimizationRequest>,
) -> Result<(StatusCode, Json<RouteOptimizationResponse>), AppError> {
    let controller = RouteOptimizationController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_route_optimization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRouteOptimizationRequest>,
) -> Result<Json<RouteOptimizationResponse>, AppError> {
    let controller = RouteOptimizationController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_route_optimization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = RouteOptimizationController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn reoptimize_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<ReoptimizeParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = RouteOptimizationController::new(state.pool.clone());
    Ok(Json(controller.reoptimize(id, params).await?))
}

async fn compare_strategies(
    State(state): State<AppState>,
    Query(params): Query<CompareParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = RouteOptimizationController::new(state.pool.clone());
    Ok(Json(controller.compare_strategies(params).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::EnvironmentConfig;
    use axum::body::Body;
    use axum::http::Request;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    // A lazy pool never connects until a query runs, which is enough for
    // routes that answer without touching storage
    fn test_state() -> AppState {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/travel_advisor")
            .unwrap();
        AppState::new(pool, EnvironmentConfig::default())
    }

    #[tokio::test]
    async fn test_compare_answers_without_storage() {
        let app = create_route_optimization_router().with_state(test_state());
        let request = Request::builder()
            .uri(format!("/compare?tripId={}", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_compare_requires_trip_id() {
        let app = create_route_optimization_router().with_state(test_state());
        let request = Request::builder()
            .uri("/compare")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
