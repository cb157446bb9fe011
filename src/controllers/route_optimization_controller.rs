use crate::dto::route_optimization_dto::{
    CompareParams, CreateRouteOptimizationRequest, ReoptimizeParams, RouteOptimizationResponse,
    UpdateRouteOptimizationRequest,
};
use crate::repositories::route_optimization_repository::{
    RouteOptimization, RouteOptimizationRepository,
};
use crate::repositories::trip_repository::TripRepository;
use crate::services::route_optimizer;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

const DEFAULT_STRATEGIES: &str = "DISTANCE,TIME,SCENIC";

pub struct RouteOptimizationController {
    repository: RouteOptimizationRepository,
    trips: TripRepository,
}

impl RouteOptimizationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteOptimizationRepository::new(pool.clone()),
            trips: TripRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<RouteOptimizationResponse>, AppError> {
        let rows = self.repository.find_all().await?;
        Ok(rows.into_iter().map(to_response).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<RouteOptimizationResponse, AppError> {
        let row = self.find_existing(id).await?;
        Ok(to_response(row))
    }

    pub async fn get_by_trip_id(&self, trip_id: Uuid) -> Result<RouteOptimizationResponse, AppError> {
        let row = self
            .repository
            .find_by_trip_id(trip_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No route optimization found for trip '{}'",
                    trip_id
                ))
            })?;
        Ok(to_response(row))
    }

    pub async fn list_by_type(
        &self,
        optimization_type: &str,
    ) -> Result<Vec<RouteOptimizationResponse>, AppError> {
        let rows = self.repository.find_by_type(optimization_type).await?;
        Ok(rows.into_iter().map(to_response).collect())
    }

    pub async fn list_by_criteria(
        &self,
        criteria: &str,
    ) -> Result<Vec<RouteOptimizationResponse>, AppError> {
        let rows = self.repository.find_by_criteria(criteria).await?;
        Ok(rows.into_iter().map(to_response).collect())
    }

    pub async fn create(
        &self,
        request: CreateRouteOptimizationRequest,
    ) -> Result<RouteOptimizationResponse, AppError> {
        // The referenced trip must exist, and a trip holds at most one record
        self.trips
            .find_by_id(request.trip_id)
            .await?
            .ok_or_else(|| not_found_error("Trip", &request.trip_id.to_string()))?;

        if self
            .repository
            .find_by_trip_id(request.trip_id)
            .await?
            .is_some()
        {
            return Err(conflict_error(
                "Route optimization",
                "tripId",
                &request.trip_id.to_string(),
            ));
        }

        let outcome = route_optimizer::optimize_route(
            request.optimization_criteria.as_deref(),
            request.optimization_type.as_deref(),
        );

        let row = self
            .repository
            .create(
                request.trip_id,
                Some(outcome.total_distance),
                Some(outcome.total_travel_time_minutes),
                request.total_travel_cost,
                Some(&outcome.route_json),
                request.optimization_criteria.as_deref(),
                request.optimization_type.as_deref(),
            )
            .await?;
        Ok(to_response(row))
    }

    /// Replace the stored fields. The trip association always stays with
    /// the existing record. Re-running the optimizer when the criteria
    /// change is not wired up yet; the caller-provided totals win.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateRouteOptimizationRequest,
    ) -> Result<RouteOptimizationResponse, AppError> {
        self.find_existing(id).await?;

        let row = self
            .repository
            .update(
                id,
                request.total_distance,
                request.total_travel_time_minutes,
                request.total_travel_cost,
                request.route_json.as_deref(),
                request.optimization_criteria.as_deref(),
                request.optimization_type.as_deref(),
            )
            .await?
            .ok_or_else(|| not_found_error("Route optimization", &id.to_string()))?;
        Ok(to_response(row))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Route optimization", &id.to_string()));
        }
        Ok(())
    }

    /// Re-run the optimizer for an existing record, optionally switching
    /// criteria and type first. With the placeholder optimizer the totals
    /// come back unchanged.
    pub async fn reoptimize(
        &self,
        id: Uuid,
        params: ReoptimizeParams,
    ) -> Result<serde_json::Value, AppError> {
        let existing = self.find_existing(id).await?;

        let criteria = params.criteria.or(existing.optimization_criteria);
        let optimization_type = params.optimization_type.or(existing.optimization_type);

        let outcome =
            route_optimizer::optimize_route(criteria.as_deref(), optimization_type.as_deref());

        let updated = self
            .repository
            .update(
                id,
                Some(outcome.total_distance),
                Some(outcome.total_travel_time_minutes),
                existing.total_travel_cost,
                Some(&outcome.route_json),
                criteria.as_deref(),
                optimization_type.as_deref(),
            )
            .await?
            .ok_or_else(|| not_found_error("Route optimization", &id.to_string()))?;

        let summary = json!({
            "distance": updated.total_distance,
            "travelTime": updated.total_travel_time_minutes,
        });
        Ok(json!({
            "routeOptimization": to_response(updated),
            "summary": summary,
        }))
    }

    /// Strategy comparison requires the real optimizer; until then this
    /// reports what it would have compared.
    pub async fn compare_strategies(
        &self,
        params: CompareParams,
    ) -> Result<serde_json::Value, AppError> {
        let strategies = split_strategies(params.strategies.as_deref());
        Ok(json!({
            "message": "Route optimization comparison not yet implemented",
            "tripId": params.trip_id,
            "strategies": strategies,
        }))
    }

    async fn find_existing(&self, id: Uuid) -> Result<RouteOptimization, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Route optimization", &id.to_string()))
    }
}

fn split_strategies(strategies: Option<&str>) -> Vec<String> {
    strategies
        .unwrap_or(DEFAULT_STRATEGIES)
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn to_response(row: RouteOptimization) -> RouteOptimizationResponse {
    RouteOptimizationResponse {
        id: row.id,
        trip_id: row.trip_id,
        total_distance: row.total_distance,
        total_travel_time_minutes: row.total_travel_time_minutes,
        total_travel_cost: row.total_travel_cost,
        route_json: row.route_json,
        optimization_criteria: row.optimization_criteria,
        optimization_type: row.optimization_type,
        created_at: row.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::trip_dto::LocationInput;
    use rust_decimal::Decimal;
    use sqlx::PgPool;

    #[test]
    fn test_default_strategies() {
        assert_eq!(split_strategies(None), vec!["DISTANCE", "TIME", "SCENIC"]);
    }

    #[test]
    fn test_explicit_strategies_are_split_and_trimmed() {
        assert_eq!(
            split_strategies(Some("TIME, COST")),
            vec!["TIME", "COST"]
        );
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        assert_eq!(split_strategies(Some("TIME,,COST,")), vec!["TIME", "COST"]);
    }

    fn endpoint(name: &str) -> LocationInput {
        LocationInput {
            id: None,
            name: Some(name.to_string()),
            city: None,
            country: None,
            latitude: None,
            longitude: None,
            description: None,
        }
    }

    async fn seed_trip(pool: &PgPool) -> Uuid {
        let (trip, _, _) = TripRepository::new(pool.clone())
            .create(
                "Alps by rail",
                &endpoint("Zurich"),
                &endpoint("Innsbruck"),
                "2025-06-01".parse().unwrap(),
                "2025-06-05".parse().unwrap(),
                Decimal::from(1500),
                None,
                "PLANNED",
            )
            .await
            .unwrap();
        trip.id
    }

    fn create_request(trip_id: Uuid) -> CreateRouteOptimizationRequest {
        CreateRouteOptimizationRequest {
            trip_id,
            total_travel_cost: None,
            optimization_criteria: Some("FASTEST".to_string()),
            optimization_type: Some("DISTANCE".to_string()),
        }
    }

    #[sqlx::test]
    async fn test_create_rejects_unknown_trip(pool: PgPool) {
        let controller = RouteOptimizationController::new(pool);
        let err = controller
            .create(create_request(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[sqlx::test]
    async fn test_create_then_get_returns_the_record(pool: PgPool) {
        let trip_id = seed_trip(&pool).await;
        let controller = RouteOptimizationController::new(pool);

        let created = controller.create(create_request(trip_id)).await.unwrap();
        let fetched = controller.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.trip_id, trip_id);
        assert_eq!(fetched.total_distance, Some(100.0));
        assert_eq!(fetched.total_travel_time_minutes, Some(120));
        assert_eq!(fetched.route_json.as_deref(), Some("{}"));
    }

    #[sqlx::test]
    async fn test_second_create_for_same_trip_conflicts(pool: PgPool) {
        let trip_id = seed_trip(&pool).await;
        let controller = RouteOptimizationController::new(pool);

        controller.create(create_request(trip_id)).await.unwrap();
        let err = controller
            .create(create_request(trip_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    // Two concurrent creates can both pass the lookup; the loser hits the
    // unique constraint and must still come back as a conflict
    #[sqlx::test]
    async fn test_duplicate_insert_surfaces_as_conflict(pool: PgPool) {
        let trip_id = seed_trip(&pool).await;
        let repository = RouteOptimizationRepository::new(pool);

        repository
            .create(trip_id, None, None, None, None, None, None)
            .await
            .unwrap();
        let err = repository
            .create(trip_id, None, None, None, None, None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[sqlx::test]
    async fn test_delete_then_get_is_not_found(pool: PgPool) {
        let trip_id = seed_trip(&pool).await;
        let controller = RouteOptimizationController::new(pool);

        let created = controller.create(create_request(trip_id)).await.unwrap();
        controller.delete(created.id).await.unwrap();
        let err = controller.get_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
