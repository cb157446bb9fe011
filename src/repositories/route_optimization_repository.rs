use crate::utils::errors::{conflict_error, AppError};
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RouteOptimization {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub total_distance: Option<f64>,
    pub total_travel_time_minutes: Option<i32>,
    pub total_travel_cost: Option<Decimal>,
    pub route_json: Option<String>,
    pub optimization_criteria: Option<String>,
    pub optimization_type: Option<String>,
    pub created_at: chrono::DateTime<Utc>,
}

pub struct RouteOptimizationRepository {
    pool: PgPool,
}

impl RouteOptimizationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<RouteOptimization>, AppError> {
        let rows = sqlx::query_as::<_, RouteOptimization>(
            "SELECT * FROM route_optimizations ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RouteOptimization>, AppError> {
        let row =
            sqlx::query_as::<_, RouteOptimization>("SELECT * FROM route_optimizations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    /// At most one record exists per trip
    pub async fn find_by_trip_id(&self, trip_id: Uuid) -> Result<Option<RouteOptimization>, AppError> {
        let row = sqlx::query_as::<_, RouteOptimization>(
            "SELECT * FROM route_optimizations WHERE trip_id = $1",
        )
        .bind(trip_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn find_by_type(&self, optimization_type: &str) -> Result<Vec<RouteOptimization>, AppError> {
        let rows = sqlx::query_as::<_, RouteOptimization>(
            "SELECT * FROM route_optimizations WHERE optimization_type = $1 ORDER BY created_at DESC",
        )
        .bind(optimization_type)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_criteria(&self, criteria: &str) -> Result<Vec<RouteOptimization>, AppError> {
        let rows = sqlx::query_as::<_, RouteOptimization>(
            "SELECT * FROM route_optimizations WHERE optimization_criteria = $1 ORDER BY created_at DESC",
        )
        .bind(criteria)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        trip_id: Uuid,
        total_distance: Option<f64>,
        total_travel_time_minutes: Option<i32>,
        total_travel_cost: Option<Decimal>,
        route_json: Option<&str>,
        optimization_criteria: Option<&str>,
        optimization_type: Option<&str>,
    ) -> Result<RouteOptimization, AppError> {
        let row = sqlx::query_as::<_, RouteOptimization>(
            r#"
            INSERT INTO route_optimizations (id, trip_id, total_distance, total_travel_time_minutes,
                                             total_travel_cost, route_json, optimization_criteria,
                                             optimization_type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(trip_id)
        .bind(total_distance)
        .bind(total_travel_time_minutes)
        .bind(total_travel_cost)
        .bind(route_json)
        .bind(optimization_criteria)
        .bind(optimization_type)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // Concurrent creates can race past the controller's lookup;
            // the UNIQUE constraint on trip_id is the arbiter, and its
            // violation is a conflict rather than a database failure.
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                conflict_error("Route optimization", "tripId", &trip_id.to_string())
            }
            _ => AppError::Database(e),
        })?;
        Ok(row)
    }

    /// Full replace of the computed fields; the trip association is part
    /// of the row and never touched here. Returns None for a missing id.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        total_distance: Option<f64>,
        total_travel_time_minutes: Option<i32>,
        total_travel_cost: Option<Decimal>,
        route_json: Option<&str>,
        optimization_criteria: Option<&str>,
        optimization_type: Option<&str>,
    ) -> Result<Option<RouteOptimization>, AppError> {
        let row = sqlx::query_as::<_, RouteOptimization>(
            r#"
            UPDATE route_optimizations
            SET total_distance = $2, total_travel_time_minutes = $3, total_travel_cost = $4,
                route_json = $5, optimization_criteria = $6, optimization_type = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(total_distance)
        .bind(total_travel_time_minutes)
        .bind(total_travel_cost)
        .bind(route_json)
        .bind(optimization_criteria)
        .bind(optimization_type)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM route_optimizations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
